//! String scanning for the nepl lexer
//!
//! Both `"` and `'` delimit strings; the closing quote must match the opening one. Raw newlines are
//! kept in the text and advance the line counter.

use super::Lexer;
use super::tokens::Token;
use crate::diagnostics::{SyntaxError, errors};

// ============================================================================
// Escape sequence handling
// ============================================================================

/// Map the character after a backslash to the character it stands for.
///
/// `a b f n r t v` are the C control escapes; anything else (including quotes and the backslash
/// itself) stands for itself.
fn unescape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        other => other,
    }
}

// ============================================================================
// String scanning
// ============================================================================

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Scan a string literal. Called after consuming the opening `quote`.
    pub(super) fn scan_string(&mut self, quote: char) -> Result<Token, SyntaxError> {
        let start_line = self.line;
        let mut value = String::new();

        loop {
            match self.advance() {
                None => return Err(errors::unterminated_string(start_line)),
                Some(c) if c == quote => return Ok(Token::string(value, self.line)),
                Some('\\') => {
                    let Some(escaped) = self.advance() else {
                        return Err(errors::unterminated_string(start_line));
                    };
                    if escaped == '\n' {
                        self.line += 1;
                    }
                    value.push(unescape(escaped));
                }
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    value.push(c);
                }
            }
        }
    }
}
