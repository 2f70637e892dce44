//! Validation utilities for Solidity identifiers

use miette::SourceSpan;
use syslib_codegen::naming::is_reserved;

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, so that errors raised deep inside a function or
/// error declaration still point at the right place.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "MoveSystem.toml");
/// ctx.validate_name("move", "function")?;
///
/// // For nested validation
/// let nested = ctx.push("move");
/// nested.validate_name("x", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// The raw manifest source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Path segments for nested validation (e.g., ["move", "x"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'move'" or just "function" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    /// Create a validation error pointing at `name`.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(name))
    }

    /// Validate that a name is a valid Solidity identifier.
    ///
    /// Checks for reserved words and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved(name) {
            return Err(Error::reserved_keyword(
                name,
                self.context_for(kind),
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Find the span of a name in the manifest source.
///
/// Looks for the quoted value first (`"move"`), which matches both TOML and
/// JSON manifests, then falls back to the first bare occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Solidity identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter, underscore or dollar sign
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, numbers, underscores and '$'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("move").is_none());
        assert!(validate_identifier("MoveSystem").is_none());
        assert!(validate_identifier("_world").is_none());
        assert!(validate_identifier("$ref").is_none());
        assert!(validate_identifier("erc20").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("move-system").is_some());
        assert!(validate_identifier("move system").is_some());
        assert!(validate_identifier("mové").is_some());
    }

    #[test]
    fn test_find_name_span_prefers_quoted_value() {
        let src = "# move the player\nname = \"move\"";
        let span = find_name_span(src, "move").unwrap();
        assert_eq!(span.offset(), 26);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_name_span_fallback() {
        let src = "parameters = [\"int32 x\"]";
        let span = find_name_span(src, "x").unwrap();
        assert_eq!(span.offset(), 21);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("name = \"move\"", "jump").is_none());
        assert!(find_name_span("name = \"\"", "").is_none());
    }

    #[test]
    fn test_parse_context_context_for() {
        let ctx = ParseContext::new("", "MoveSystem.toml");
        assert_eq!(ctx.context_for("function"), "function");

        let nested = ctx.push("functions").push("move");
        assert_eq!(nested.path_string(), "functions.move");
        assert_eq!(nested.context_for("parameter"), "parameter in 'functions.move'");
    }

    #[test]
    fn test_parse_context_validate_name() {
        let ctx = ParseContext::new("name = \"function\"", "MoveSystem.toml");
        assert!(ctx.validate_name("move", "function").is_ok());

        let err = ctx.validate_name("function", "function").unwrap_err();
        assert!(err.to_string().contains("reserved word"));

        let err = ctx.validate_name("2d", "function").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
