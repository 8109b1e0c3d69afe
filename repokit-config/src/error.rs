use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for repokit-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "repokit.toml");
/// ctx.invalid_model_error("Foo//Bar", "empty segment", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid folder error.
    pub fn invalid_folder_error(
        &self,
        role: impl Into<String>,
        leaf: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFolder {
            src: self.named_source(),
            span,
            role: role.into(),
            leaf: leaf.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid model error.
    pub fn invalid_model_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidModel {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate model error.
    pub fn duplicate_model_error(
        &self,
        name: impl Into<String>,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateModel {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'repokit init' to create a default configuration"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse repokit.toml")]
    #[diagnostic(code(repokit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(repokit::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid folder '{leaf}' for {role}")]
    #[diagnostic(
        code(repokit::invalid_folder),
        help(
            "{reason}. Folders are relative to the application root, e.g. 'Repositories' or 'Repositories/Eloquent'."
        )
    )]
    InvalidFolder {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid folder")]
        span: Option<SourceSpan>,
        role: String,
        leaf: String,
        reason: String,
    },

    #[error("invalid model name '{name}'")]
    #[diagnostic(
        code(repokit::invalid_model),
        help("{reason}. Use a class name like 'Invoice' or a nested one like 'Accounting/Invoice'.")
    )]
    InvalidModel {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid model name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("model '{name}' is registered more than once")]
    #[diagnostic(
        code(repokit::duplicate_model),
        help("'Foo/Bar' and 'Foo\\Bar' name the same model, keep only one entry")
    )]
    DuplicateModel {
        #[source_code]
        src: NamedSource<String>,
        #[label("first registered here")]
        first_span: SourceSpan,
        #[label("registered again here")]
        second_span: SourceSpan,
        name: String,
    },
}
