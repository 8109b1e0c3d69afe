//! Shared string utilities for names, namespaces and paths.

/// Namespace separator used by generated PHP code.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Path separator used for folders relative to the application root.
pub const PATH_SEPARATOR: char = '/';

/// Uppercase the first character, keep the rest as-is (e.g., "events" -> "Events")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Ensure a string contains only backslashes (e.g., "Foo/Bar" -> "Foo\Bar")
pub fn to_namespace_format(s: &str) -> String {
    s.replace(PATH_SEPARATOR, "\\")
}

/// Ensure a string contains only forward slashes (e.g., "Foo\Bar" -> "Foo/Bar")
pub fn to_path_format(s: &str) -> String {
    s.replace(NAMESPACE_SEPARATOR, "/")
}

/// Check whether a character separates segments in either convention.
pub fn is_separator(c: char) -> bool {
    c == PATH_SEPARATOR || c == NAMESPACE_SEPARATOR
}

/// PHP reserved words that cannot be used as class or namespace names.
/// Source: https://www.php.net/manual/en/reserved.php
pub const PHP_RESERVED_WORDS: &[&str] = &[
    // Keywords
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function", "global", "goto",
    "if", "implements", "include", "instanceof", "insteadof", "interface", "isset", "list",
    "match", "namespace", "new", "or", "print", "private", "protected", "public", "readonly",
    "require", "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var",
    "while", "xor", "yield",
    // Reserved class names
    "bool", "false", "float", "int", "iterable", "mixed", "never", "null", "object", "parent",
    "self", "string", "true", "void",
];

/// Check if a name is a PHP reserved word (PHP keywords are case-insensitive)
pub fn is_reserved_word(name: &str) -> bool {
    PHP_RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Validate a single PHP class name segment.
///
/// Returns `None` if valid, otherwise a short reason.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Some("name must start with a letter or underscore");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name contains invalid characters");
    }

    if is_reserved_word(name) {
        return Some("name is a PHP reserved word");
    }

    None
}
