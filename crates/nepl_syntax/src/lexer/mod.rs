//! Lexer for the nepl language
//!
//! Handles tokenization including:
//! - Statement separators (`;` and end of line) and explicit `\` line continuation
//! - `#` line comments
//! - String literals with `\` escapes
//! - Bare words: identifiers, integer/float literals and the `$OPERATOR`/`$UNOPERATOR` directives
//! - Single-character punctuation
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenValue, Token)
//! - `strings` - String literal scanning
//! - `words` - Bare word accumulation and classification (including the `3.field` split)

mod strings;
mod words;
pub mod tokens;

pub use tokens::{Token, TokenKind, TokenValue};

use std::iter::Peekable;

use crate::diagnostics::{SyntaxError, errors};
use nepl_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// The lexer pulls one character at a time from a forward-only stream. Besides
// the line counter it keeps a two-part pushback slot used when a word such as
// `3.field` turns out not to be a float:
//
//   "3.f" → emit INTEGER(3) → [pending_dot, held = "f"]
//         → emit DOT        → [held = "f"]
//         → resume word "f" → IDENTIFIER(field)
// ============================================================================

/// Lexer for nepl source code.
///
/// Produces one [`Token`] per [`Lexer::next_token`] call. Once the character stream is exhausted it
/// keeps returning `SEMICOLON` tokens (end-of-statement sentinel) rather than failing.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    /// 1-based number of the current line
    line: u32,
    /// A DOT split off a number is owed to the caller
    pending_dot: bool,
    /// Word text after the split dot, resumed after the pending DOT
    held: String,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Create a new lexer over a character stream.
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            line: 1,
            pending_dot: false,
            held: String::new(),
        }
    }

    /// Return `true` once the stream is drained and nothing is held back.
    pub fn is_exhausted(&mut self) -> bool {
        !self.pending_dot && self.held.is_empty() && self.chars.peek().is_none()
    }

    /// Scan the next token.
    ///
    /// ## Errors
    /// Returns a [`SyntaxError`] for an unterminated string or for characters between a continuation
    /// backslash and the end of its line.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let token = self.scan_token()?;
        tracing::trace!(%token, "lexed token");
        Ok(token)
    }

    /// Drain the stream into a token list.
    pub fn all_tokens(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        while !self.is_exhausted() {
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Emit a separator for the newline under the cursor at the pre-increment line.
    fn newline(&mut self) -> Token {
        self.advance();
        let token = Token::simple(TokenKind::Semicolon, self.line);
        self.line += 1;
        token
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<Token, SyntaxError> {
        if self.pending_dot {
            self.pending_dot = false;
            return Ok(Token::simple(TokenKind::Dot, self.line));
        }
        if !self.held.is_empty() {
            let held = std::mem::take(&mut self.held);
            return Ok(self.scan_word(held));
        }

        loop {
            let Some(c) = self.peek() else {
                return Ok(Token::simple(TokenKind::Semicolon, self.line));
            };

            match c {
                '\n' => return Ok(self.newline()),

                '"' | '\'' => {
                    self.advance();
                    return self.scan_string(c);
                }

                '#' => self.skip_comment(),

                '\\' => {
                    self.advance();
                    self.skip_continuation()?;
                }

                _ if is_space(c) => {
                    self.advance();
                }

                _ => {
                    if let Some(id) = punctuation::from_char(c) {
                        self.advance();
                        return Ok(Token::simple(TokenKind::from_punctuation(id), self.line));
                    }
                    return Ok(self.scan_word(String::new()));
                }
            }
        }
    }

    /// Discard a `#` comment through the end of its line, newline included.
    fn skip_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '\n' {
                self.line += 1;
                break;
            }
        }
    }

    /// Consume the rest of a line after a continuation backslash.
    fn skip_continuation(&mut self) -> Result<(), SyntaxError> {
        while let Some(c) = self.advance() {
            if c == '\n' {
                self.line += 1;
                return Ok(());
            }
            if !is_space(c) {
                return Err(errors::characters_after_backslash(self.line));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// C-locale whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source.chars()).all_tokens()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source.chars()).all_tokens()
}

// ============================================================================
// TESTS
// ============================================================================
