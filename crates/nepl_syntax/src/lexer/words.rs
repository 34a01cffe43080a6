//! Bare word scanning for the nepl lexer
//!
//! A word runs until whitespace or a break character. It is then classified as a directive,
//! an integer (`^\d+$`), a float (`^\d*\.\d+$`) or, failing all of those, an identifier.
//!
//! A word may swallow at most one `.`, and only while it still looks like a number. When a
//! non-digit follows the point (`3.field`, `1.2x`), the digits before the point are emitted as an
//! INTEGER, and a DOT plus the remaining text are held back for the following calls.

use super::tokens::{Token, TokenKind};
use super::{Lexer, is_space};
use nepl_core::lang::directives::{self, DirectiveId};
use nepl_core::lang::punctuation;
use nepl_core::{Float, Integer};

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Accumulate a word starting from `buffer` (empty, or text held back by a split).
    pub(super) fn scan_word(&mut self, mut buffer: String) -> Token {
        let mut digits = buffer.chars().all(|c| c.is_ascii_digit());
        let mut dec_point = false;

        while let Some(c) = self.peek() {
            if is_space(c) || punctuation::is_break_char(c) {
                break;
            }

            if c == '.' {
                // Not a number any more, or a second point: the dot is left for the next call.
                if !digits || dec_point {
                    break;
                }
                buffer.push(c);
                dec_point = true;
            } else {
                buffer.push(c);
                if !c.is_ascii_digit() {
                    digits = false;
                    if dec_point {
                        self.advance();
                        return self.split_at_point(&buffer);
                    }
                }
            }
            self.advance();
        }

        self.classify(&buffer)
    }

    /// Emit the part before the point and hold back `DOT` + the rest.
    fn split_at_point(&mut self, buffer: &str) -> Token {
        let (whole, rest) = buffer.split_once('.').unwrap_or((buffer, ""));
        self.pending_dot = true;
        self.held = rest.to_string();
        tracing::trace!(whole, rest, "split number at decimal point");
        self.classify(whole)
    }

    /// Turn a finished word into a token.
    fn classify(&self, text: &str) -> Token {
        match directives::from_str(text) {
            Some(DirectiveId::Operator) => return Token::simple(TokenKind::Operator, self.line),
            Some(DirectiveId::Unoperator) => return Token::simple(TokenKind::Unoperator, self.line),
            Some(DirectiveId::Unary) | None => {}
        }
        if let Ok(value) = Integer::from_decimal(text) {
            return Token::integer(value, self.line);
        }
        if let Ok(value) = Float::from_decimal(text) {
            return Token::float(value, self.line);
        }
        Token::identifier(text, self.line)
    }
}
