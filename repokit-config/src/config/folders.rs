use std::collections::BTreeMap;

use repokit_core::Role;
use serde::Deserialize;

/// Folder leaf per role.
///
/// A leaf may be nested (`Repositories/Eloquent`) and use either separator.
/// Roles without an entry fall back to [`Role::default_leaf`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FolderConfig {
    leaves: BTreeMap<Role, String>,
}

impl FolderConfig {
    /// Folder leaf for a role, configured or default.
    pub fn leaf(&self, role: Role) -> String {
        self.leaves
            .get(&role)
            .cloned()
            .unwrap_or_else(|| role.default_leaf())
    }

    /// Explicitly configured entries.
    pub fn configured(&self) -> impl Iterator<Item = (Role, &str)> {
        self.leaves.iter().map(|(role, leaf)| (*role, leaf.as_str()))
    }

    /// Set the leaf for a role.
    pub fn with(mut self, role: Role, leaf: impl Into<String>) -> Self {
        self.leaves.insert(role, leaf.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_role_uses_capitalized_name() {
        let folders = FolderConfig::default().with(Role::Repositories, "Repo");

        assert_eq!(folders.leaf(Role::Repositories), "Repo");
        assert_eq!(folders.leaf(Role::Events), "Events");
        assert_eq!(
            folders.configured().collect::<Vec<_>>(),
            vec![(Role::Repositories, "Repo")]
        );
    }

    #[test]
    fn test_deserialize_from_table() {
        let folders: FolderConfig = toml::from_str(
            r#"
            repositories = "Repositories/Eloquent"
            listeners = "Handlers"
            "#,
        )
        .unwrap();

        assert_eq!(folders.leaf(Role::Repositories), "Repositories/Eloquent");
        assert_eq!(folders.leaf(Role::Listeners), "Handlers");
        assert_eq!(folders.leaf(Role::Contracts), "Contracts");
        assert_eq!(folders.configured().count(), 2);
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let result: Result<FolderConfig, _> = toml::from_str(r#"controllers = "Http""#);
        assert!(result.is_err());
    }
}
