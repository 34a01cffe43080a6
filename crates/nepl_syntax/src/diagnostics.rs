//! Diagnostics and error reporting for nepl.
//!
//! There is a single error kind, [`SyntaxError`]: a message plus the 1-based line where the problem
//! was detected. Every error is fatal; lexing and parsing stop at the first one.

use miette::Diagnostic;
use thiserror::Error;

/// A lexing or parsing error with the line it was detected on.
///
/// The display form is `"<message> in line <line>"`, built from the fields on demand.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} in line {line}")]
#[diagnostic(code(nepl::syntax))]
pub struct SyntaxError {
    pub message: String,
    pub line: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }

    /// Grammar mismatch: ``expected `<what>`, found `<found>` ``.
    pub fn expected(what: impl std::fmt::Display, found: impl std::fmt::Display, line: u32) -> Self {
        Self::new(format!("expected `{what}`, found `{found}`"), line)
    }

    /// Token not valid at this position: ``unexpected `<what>` ``.
    pub fn unexpected(what: impl std::fmt::Display, line: u32) -> Self {
        Self::new(format!("unexpected `{what}`"), line)
    }
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the fixed-text errors raised by the lexer and the operator directives.
pub mod errors {
    use super::SyntaxError;

    pub fn unterminated_string(line: u32) -> SyntaxError {
        SyntaxError::new("unterminated string literal", line)
    }

    pub fn characters_after_backslash(line: u32) -> SyntaxError {
        SyntaxError::new("unexpected characters after backslash", line)
    }

    pub fn redeclaring_operator(line: u32) -> SyntaxError {
        SyntaxError::new("redeclaring operator", line)
    }

    pub fn disabling_undeclared_operator(line: u32) -> SyntaxError {
        SyntaxError::new("disabling undeclared operator", line)
    }

    pub fn brackets_nested_too_deeply(line: u32) -> SyntaxError {
        SyntaxError::new("brackets nested too deeply", line)
    }

    pub fn expression_nested_too_deeply(line: u32) -> SyntaxError {
        SyntaxError::new("expression nested too deeply", line)
    }

    pub fn unary_operator_arity(elements: usize, line: u32) -> SyntaxError {
        SyntaxError::new(format!("declaring unary operator with {elements} elements"), line)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Byte range `(offset, len)` of a 1-based line, excluding its newline.
///
/// Lines past the end of `source` (the end-of-input separator) map to an empty range at the end.
fn line_range(source: &str, line: u32) -> (usize, usize) {
    let mut start = 0;
    for _ in 1..line.max(1) {
        match source[start..].find('\n') {
            Some(i) => start += i + 1,
            None => return (source.len(), 0),
        }
    }
    let len = source[start..].find('\n').unwrap_or(source.len() - start);
    (start, len)
}

/// Format an error with source context, compiler style:
///
/// ```text
/// syntax error: unexpected `RIGHT_PARENTHESIS`
///   --> demo.nepl:3
///    |
///  3 | f(a))
///    |
/// ```
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let (start, len) = line_range(source, error.line);
    let line_text = &source[start..start + len];
    let width = error.line.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("syntax error: {}\n", error.message));
    out.push_str(&format!("  --> {}:{}\n", file_name, error.line));
    out.push_str(&format!("  {:>width$} |\n", ""));
    out.push_str(&format!("  {:>width$} | {}\n", error.line, line_text));
    out.push_str(&format!("  {:>width$} |\n", ""));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line() {
        let err = SyntaxError::unexpected("COMMA", 4);
        assert_eq!(err.to_string(), "unexpected `COMMA` in line 4");
    }

    #[test]
    fn test_line_range() {
        let src = "first\nsecond\nthird";
        assert_eq!(line_range(src, 1), (0, 5));
        assert_eq!(line_range(src, 2), (6, 6));
        assert_eq!(line_range(src, 3), (13, 5));
        assert_eq!(line_range(src, 9), (src.len(), 0));
    }

    #[test]
    fn test_format_error_shows_offending_line() {
        let src = "a\nf(a]\n";
        let err = SyntaxError::expected("RIGHT_PARENTHESIS", "RIGHT_SQUARE_BRACKET", 2);
        let rendered = format_error("demo.nepl", src, &err);
        assert!(rendered.contains("--> demo.nepl:2"));
        assert!(rendered.contains("2 | f(a]"));
        assert!(rendered.starts_with("syntax error: expected `RIGHT_PARENTHESIS`"));
    }
}
