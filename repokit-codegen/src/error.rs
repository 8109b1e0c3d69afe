use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for repokit-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The model identifier given by the user is malformed.
    #[error("invalid model name '{raw}': {reason}")]
    #[diagnostic(
        code(repokit::invalid_argument),
        help("pass a class name like 'YourModel' or a nested one like 'Foo/Bar'")
    )]
    InvalidArgument { raw: String, reason: String },

    /// The target file of an artifact already exists. Never overwritten.
    #[error("'{}' already exists", path.display())]
    #[diagnostic(code(repokit::already_exists))]
    AlreadyExists { path: PathBuf },

    /// Reading, creating or writing a file failed.
    #[error("filesystem error at '{}'", path.display())]
    #[diagnostic(code(repokit::filesystem))]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_argument(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must abort a scaffold batch.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::AlreadyExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fatal() {
        let exists = Error::AlreadyExists {
            path: PathBuf::from("app/Contracts/Foo.php"),
        };
        assert!(!exists.is_fatal());

        let io = Error::filesystem(
            "app/Contracts",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io.is_fatal());

        assert!(Error::invalid_argument("", "empty").is_fatal());
    }

    #[test]
    fn test_display_includes_path() {
        let err = Error::AlreadyExists {
            path: PathBuf::from("app/Repositories/FooRepository.php"),
        };
        assert_eq!(
            err.to_string(),
            "'app/Repositories/FooRepository.php' already exists"
        );
    }
}
