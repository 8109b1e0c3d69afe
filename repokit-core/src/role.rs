//! Artifact roles and their folder conventions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::capitalize;

/// Folder roles a project can configure.
///
/// Every generated artifact lives under exactly one role's folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Models,
    Contracts,
    Repositories,
    Events,
    Listeners,
    Getters,
    Filters,
}

impl Role {
    /// All roles, in configuration order.
    pub const ALL: [Role; 7] = [
        Role::Models,
        Role::Contracts,
        Role::Repositories,
        Role::Events,
        Role::Listeners,
        Role::Getters,
        Role::Filters,
    ];

    /// Returns the configuration key for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Models => "models",
            Role::Contracts => "contracts",
            Role::Repositories => "repositories",
            Role::Events => "events",
            Role::Listeners => "listeners",
            Role::Getters => "getters",
            Role::Filters => "filters",
        }
    }

    /// Folder leaf used when the role is not configured.
    pub fn default_leaf(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
                format!("unknown role '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_leaf() {
        assert_eq!(Role::Events.default_leaf(), "Events");
        assert_eq!(Role::Repositories.default_leaf(), "Repositories");
        assert_eq!(Role::Models.default_leaf(), "Models");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Role::from_str("events").unwrap(), Role::Events);
        assert_eq!(Role::from_str("Listeners").unwrap(), Role::Listeners);
        assert!(Role::from_str("controllers").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Getters.to_string(), "getters");
        assert_eq!(Role::Filters.to_string(), "filters");
    }

    #[test]
    fn test_deserialize() {
        let role: Role = serde_json::from_str(r#""contracts""#).unwrap();
        assert_eq!(role, Role::Contracts);

        assert!(serde_json::from_str::<Role>(r#""controllers""#).is_err());
    }
}
