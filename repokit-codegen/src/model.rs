//! Model name resolution.
//!
//! A model is named by its class name, optionally prefixed by the
//! sub-namespace it lives in: `Invoice`, `Accounting/Invoice` or
//! `Accounting\Invoice`. Every generated artifact mirrors that prefix, both
//! as a sub-folder and as a sub-namespace.

use std::{fmt, str::FromStr};

use repokit_core::{
    NAMESPACE_SEPARATOR, to_namespace_format, to_path_format, validate_identifier,
};
use serde::Serialize;

use crate::{Error, Result};

/// A resolved model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModelIdentifier {
    base_name: String,
    path_suffix: Option<String>,
    namespace_suffix: Option<String>,
}

impl ModelIdentifier {
    /// Resolve a user-supplied model name.
    ///
    /// Both `/` and `\` separate segments. Case is preserved as given.
    ///
    /// # Example
    ///
    /// ```
    /// use repokit_codegen::ModelIdentifier;
    ///
    /// let model = ModelIdentifier::resolve("Accounting/Invoice").unwrap();
    /// assert_eq!(model.base_name(), "Invoice");
    /// assert_eq!(model.path_suffix(), Some("/Accounting"));
    /// assert_eq!(model.namespace_suffix(), Some("\\Accounting"));
    /// ```
    pub fn resolve(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::invalid_argument(raw, "name cannot be empty"));
        }

        let canonical = to_namespace_format(raw);
        if canonical.ends_with(NAMESPACE_SEPARATOR) {
            return Err(Error::invalid_argument(raw, "name ends with a separator"));
        }

        for segment in canonical.split(NAMESPACE_SEPARATOR) {
            if segment.is_empty() {
                return Err(Error::invalid_argument(
                    raw,
                    "name contains an empty segment",
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(Error::invalid_argument(raw, reason));
            }
        }

        let (prefix, base_name) = match canonical.rsplit_once(NAMESPACE_SEPARATOR) {
            Some((prefix, base)) => (Some(prefix), base),
            None => (None, canonical.as_str()),
        };

        Ok(Self {
            base_name: base_name.to_string(),
            path_suffix: prefix.map(|p| format!("/{}", to_path_format(p))),
            namespace_suffix: prefix.map(|p| format!("\\{}", p)),
        })
    }

    /// The class name (last segment).
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Leading segments in path form with a leading slash (e.g., "/Accounting").
    pub fn path_suffix(&self) -> Option<&str> {
        self.path_suffix.as_deref()
    }

    /// Leading segments in namespace form with a leading backslash (e.g., "\Accounting").
    pub fn namespace_suffix(&self) -> Option<&str> {
        self.namespace_suffix.as_deref()
    }

    /// The whole name in namespace form (e.g., "Accounting\Invoice").
    pub fn namespaced(&self) -> String {
        match &self.namespace_suffix {
            Some(suffix) => format!("{}\\{}", &suffix[1..], self.base_name),
            None => self.base_name.clone(),
        }
    }
}

impl FromStr for ModelIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for ModelIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.namespaced())
    }
}

/// Resolve a user-supplied model name.
pub fn resolve(raw: &str) -> Result<ModelIdentifier> {
    ModelIdentifier::resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_has_no_suffixes() {
        for raw in ["Invoice", "invoice", "A", "_Draft", "Line2"] {
            let model = resolve(raw).unwrap();
            assert_eq!(model.base_name(), raw);
            assert_eq!(model.path_suffix(), None);
            assert_eq!(model.namespace_suffix(), None);
        }
    }

    #[test]
    fn test_single_prefix() {
        let model = resolve("A/B").unwrap();
        assert_eq!(model.base_name(), "B");
        assert_eq!(model.namespace_suffix(), Some("\\A"));
        assert_eq!(model.path_suffix(), Some("/A"));
    }

    #[test]
    fn test_backslash_input() {
        let model = resolve("Accounting\\Invoice").unwrap();
        assert_eq!(model.base_name(), "Invoice");
        assert_eq!(model.namespace_suffix(), Some("\\Accounting"));
        assert_eq!(model.path_suffix(), Some("/Accounting"));
        assert_eq!(model, resolve("Accounting/Invoice").unwrap());
    }

    #[test]
    fn test_deeply_nested_splits_at_last_separator() {
        let model = resolve("Sales/Accounting\\Invoice").unwrap();
        assert_eq!(model.base_name(), "Invoice");
        assert_eq!(model.namespace_suffix(), Some("\\Sales\\Accounting"));
        assert_eq!(model.path_suffix(), Some("/Sales/Accounting"));
        assert_eq!(model.namespaced(), "Sales\\Accounting\\Invoice");
    }

    #[test]
    fn test_suffixes_match_up_to_separator() {
        for raw in ["A/B", "A/B/C", "Foo\\Bar\\Baz", "X/Y\\Z"] {
            let model = resolve(raw).unwrap();
            let ns = model.namespace_suffix().unwrap();
            let path = model.path_suffix().unwrap();
            assert_eq!(to_path_format(ns), path);
            assert_eq!(to_namespace_format(path), ns);
        }
    }

    #[test]
    fn test_case_is_preserved() {
        let model = resolve("accounting/invoice").unwrap();
        assert_eq!(model.base_name(), "invoice");
        assert_eq!(model.namespace_suffix(), Some("\\accounting"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(matches!(resolve(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(resolve("   "), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_trailing_separator_is_invalid() {
        let err = resolve("Foo/").unwrap_err();
        match err {
            Error::InvalidArgument { raw, reason } => {
                assert_eq!(raw, "Foo/");
                assert_eq!(reason, "name ends with a separator");
            }
            other => panic!("expected invalid argument, got {:?}", other),
        }
        assert!(resolve("Foo\\").is_err());
    }

    #[test]
    fn test_empty_segments_are_invalid() {
        assert!(resolve("/Foo").is_err());
        assert!(resolve("Foo//Bar").is_err());
        assert!(resolve("Foo/\\Bar").is_err());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(resolve("Some Model").is_err());
        assert!(resolve("2Fast").is_err());
        assert!(resolve("Foo/Bar-Baz").is_err());
        assert!(resolve("Accounting/Interface").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let model: ModelIdentifier = "Foo/Bar".parse().unwrap();
        assert_eq!(model.to_string(), "Foo\\Bar");
    }
}
