//! Validation context and utilities for configuration parsing.

use std::sync::Arc;

use miette::SourceSpan;
use repokit_core::{Role, is_separator, to_namespace_format, validate_identifier};

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "repokit.toml");
/// ctx.validate_folder(Role::Repositories, "Repositories/Eloquent")?;
/// ctx.validate_models(&["Invoice".into(), "Accounting/Invoice".into()])?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Validate a folder leaf: one or more identifier segments.
    pub fn validate_folder(&self, role: Role, leaf: &str) -> Result<()> {
        if let Some(reason) = validate_segments(leaf) {
            let span = find_key_span(self.source.src(), "folders", role.as_str());
            return Err(self
                .source
                .invalid_folder_error(role.as_str(), leaf, reason, span));
        }
        Ok(())
    }

    /// Validate the registered model list: well-formed names, no duplicates.
    ///
    /// PHP class names are case-insensitive, so `Invoice` and `invoice` collide.
    pub fn validate_models(&self, models: &[String]) -> Result<()> {
        for (i, model) in models.iter().enumerate() {
            if let Some(reason) = validate_segments(model) {
                let span = find_string_span(self.source.src(), model, 0);
                return Err(self.source.invalid_model_error(model, reason, span));
            }

            let canonical = to_namespace_format(model);
            let first = models[..i]
                .iter()
                .position(|earlier| to_namespace_format(earlier).eq_ignore_ascii_case(&canonical));

            if let Some(first) = first {
                return Err(self.duplicate_error(models, first, i));
            }
        }
        Ok(())
    }

    fn duplicate_error(&self, models: &[String], first: usize, second: usize) -> Box<crate::Error> {
        let src = self.source.src();
        let name = &models[second];

        // Exact repeats share a literal, so the second one is the next occurrence.
        let second_skip = if models[first] == *name { 1 } else { 0 };
        let first_span = find_string_span(src, &models[first], 0);
        let second_span = find_string_span(src, name, second_skip);

        match (first_span, second_span) {
            (Some(first_span), Some(second_span)) => {
                self.source
                    .duplicate_model_error(name, first_span, second_span)
            }
            _ => self.source.validation_error(
                format!("model '{}' is registered more than once", name),
                None,
            ),
        }
    }
}

/// Validate a separator-joined name. Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_segments(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name cannot be empty");
    }

    for segment in name.split(is_separator) {
        if segment.is_empty() {
            return Some("name contains an empty segment");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
    }
    None
}

/// Find the span of a quoted string value, skipping `skip` earlier occurrences.
///
/// Backslashes are escaped inside TOML basic strings, so both spellings are tried.
pub(crate) fn find_string_span(src: &str, value: &str, skip: usize) -> Option<SourceSpan> {
    let escaped = value.replace('\\', "\\\\");
    let candidates = [
        format!("\"{}\"", escaped),
        format!("'{}'", value),
        format!("\"{}\"", value),
    ];

    for pattern in &candidates {
        let mut found = src.match_indices(pattern.as_str()).skip(skip);
        if let Some((pos, matched)) = found.next() {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, matched.len() - 2)));
        }
    }

    None
}

/// Find the span of a `key =` assignment at the start of a line inside `[table]`.
pub(crate) fn find_key_span(src: &str, table: &str, key: &str) -> Option<SourceSpan> {
    let header = format!("[{}]", table);
    let mut offset = src.find(&header)? + header.len();
    for line in src[offset..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        if trimmed.starts_with('[') {
            break;
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_segments() {
        assert!(validate_segments("Invoice").is_none());
        assert!(validate_segments("Accounting/Invoice").is_none());
        assert!(validate_segments("Accounting\\Invoice").is_none());
        assert!(validate_segments("").is_some());
        assert!(validate_segments("Foo/").is_some());
        assert!(validate_segments("/Foo").is_some());
        assert!(validate_segments("Foo//Bar").is_some());
        assert!(validate_segments("Foo/9Bar").is_some());
        assert!(validate_segments("Foo/Class").is_some());
    }

    #[test]
    fn test_find_string_span() {
        let src = r#"models = ["Invoice", "Invoice"]"#;
        let first = find_string_span(src, "Invoice", 0).unwrap();
        let second = find_string_span(src, "Invoice", 1).unwrap();

        assert_eq!(first.offset(), 11);
        assert_eq!(first.len(), 7);
        assert_eq!(second.offset(), 22);
        assert!(find_string_span(src, "Invoice", 2).is_none());
    }

    #[test]
    fn test_find_string_span_escaped_backslash() {
        let src = r#"models = ["Foo\\Bar"]"#;
        let span = find_string_span(src, "Foo\\Bar", 0).unwrap();

        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), "Foo\\\\Bar".len());
    }

    #[test]
    fn test_find_key_span() {
        let src = "models = []\n[folders]\n  models = \"Entities\"\n[app]\nevents = 1\n";
        let span = find_key_span(src, "folders", "models").unwrap();

        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 6);
        assert!(find_key_span(src, "folders", "events").is_none());
        assert!(find_key_span(src, "missing", "models").is_none());
    }

    #[test]
    fn test_validate_models_reports_duplicates_across_separators() {
        let src = r#"models = ["Foo/Bar", "Foo\\Bar"]"#;
        let ctx = ParseContext::new(src, "repokit.toml");
        let models = vec!["Foo/Bar".to_string(), "Foo\\Bar".to_string()];

        let err = ctx.validate_models(&models).unwrap_err();
        assert!(matches!(*err, crate::Error::DuplicateModel { .. }));
    }

    #[test]
    fn test_validate_models_reports_duplicates_ignoring_case() {
        let src = r#"models = ["Accounting/Invoice", "accounting\\INVOICE"]"#;
        let ctx = ParseContext::new(src, "repokit.toml");
        let models = vec![
            "Accounting/Invoice".to_string(),
            "accounting\\INVOICE".to_string(),
        ];

        let err = ctx.validate_models(&models).unwrap_err();
        assert!(matches!(*err, crate::Error::DuplicateModel { .. }));
    }

    #[test]
    fn test_validate_models_accepts_distinct_names() {
        let ctx = ParseContext::new(r#"models = ["Invoice", "Invoices"]"#, "repokit.toml");
        let models = vec!["Invoice".to_string(), "Invoices".to_string()];

        assert!(ctx.validate_models(&models).is_ok());
    }
}
