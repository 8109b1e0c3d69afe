//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Config, validate::ParseContext};
use crate::{Error, Result};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "repokit.toml")
    }
}

impl Config {
    /// Parse a repokit.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a repokit.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = ParseContext::new(content, filename);
    let config: Config =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

/// Validate the configuration after parsing.
fn validate_config(config: &Config, ctx: &ParseContext) -> Result<()> {
    for (role, leaf) in config.folders.configured() {
        ctx.validate_folder(role, leaf)?;
    }

    if config.app.namespace.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("root namespace cannot be empty", None));
    }

    if config.app.extension.trim().is_empty() || config.app.extension.starts_with('.') {
        return Err(ctx.source_context().validation_error(
            format!(
                "invalid file extension '{}', use e.g. 'php' without a leading dot",
                config.app.extension
            ),
            None,
        ));
    }

    ctx.validate_models(&config.models)
}

#[cfg(test)]
mod tests {
    use repokit_core::Role;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str(
            r#"
            models = ["Invoice", "Accounting/Ledger"]

            [app]
            root = "src"
            namespace = "Acme"
            extension = "php"

            [folders]
            repositories = "Repositories/Eloquent"
            contracts = "Contracts\\Repositories"
            "#,
        )
        .unwrap();

        assert_eq!(config.models, vec!["Invoice", "Accounting/Ledger"]);
        assert_eq!(config.app.root, "src");
        assert_eq!(config.app.namespace, "Acme");
        assert_eq!(config.app.stubs, "stubs/repokit");
        assert_eq!(
            config.folders.leaf(Role::Repositories),
            "Repositories/Eloquent"
        );
        assert_eq!(
            config.folders.leaf(Role::Contracts),
            "Contracts\\Repositories"
        );
        assert_eq!(config.folders.leaf(Role::Events), "Events");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.models.is_empty());
        assert_eq!(config.app, Default::default());
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Config::from_str("models = [").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = Config::from_str(
            r#"
            [folders]
            controllers = "Http/Controllers"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_folder_leaf() {
        let err = Config::from_str(
            r#"
            [folders]
            events = "Events/"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidFolder { role, span, .. } => {
                assert_eq!(role, "events");
                assert!(span.is_some());
            }
            other => panic!("expected invalid folder error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_model_name() {
        let err = Config::from_str(r#"models = ["Accounting/"]"#).unwrap_err();
        assert!(matches!(*err, Error::InvalidModel { .. }));

        let err = Config::from_str(r#"models = ["Some Model"]"#).unwrap_err();
        assert!(matches!(*err, Error::InvalidModel { .. }));
    }

    #[test]
    fn test_duplicate_model() {
        let err = Config::from_str(r#"models = ["Invoice", "Invoice"]"#).unwrap_err();
        match *err {
            Error::DuplicateModel {
                first_span,
                second_span,
                ..
            } => assert!(first_span.offset() < second_span.offset()),
            other => panic!("expected duplicate model error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_extension() {
        let err = Config::from_str(
            r#"
            [app]
            extension = ".php"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/definitely/not/here/repokit.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
