//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites, and to keep delimiter
//! pairing in one place.

use crate::lexer::{Token, TokenKind, TokenValue};
use nepl_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Map a punctuation id from the registry to its token kind.
    pub fn from_punctuation(id: PunctuationId) -> Self {
        match id {
            PunctuationId::LParen => TokenKind::LeftParenthesis,
            PunctuationId::RParen => TokenKind::RightParenthesis,
            PunctuationId::LBracket => TokenKind::LeftSquareBracket,
            PunctuationId::RBracket => TokenKind::RightSquareBracket,
            PunctuationId::LBrace => TokenKind::LeftBrace,
            PunctuationId::RBrace => TokenKind::RightBrace,
            PunctuationId::Semicolon => TokenKind::Semicolon,
            PunctuationId::Comma => TokenKind::Comma,
            PunctuationId::Dot => TokenKind::Dot,
        }
    }

    /// Return `true` for `(`, `[` and `{`.
    pub fn is_opening(self) -> bool {
        self.closing().is_some()
    }

    /// Return `true` for `)`, `]` and `}`.
    pub fn is_closing(self) -> bool {
        matches!(
            self,
            TokenKind::RightParenthesis | TokenKind::RightSquareBracket | TokenKind::RightBrace
        )
    }

    /// Return the closing kind that matches an opening delimiter.
    pub fn closing(self) -> Option<TokenKind> {
        match self {
            TokenKind::LeftParenthesis => Some(TokenKind::RightParenthesis),
            TokenKind::LeftSquareBracket => Some(TokenKind::RightSquareBracket),
            TokenKind::LeftBrace => Some(TokenKind::RightBrace),
            _ => None,
        }
    }

    /// Return `true` if tokens of this kind carry a value.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::String | TokenKind::Integer | TokenKind::Float
        )
    }
}

impl Token {
    /// Borrow the text of an identifier or string token.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return `true` if this is an identifier spelled exactly `spelling`.
    pub fn is_identifier(&self, spelling: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text() == Some(spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nepl_core::lang::punctuation;

    #[test]
    fn test_closing_matches_registry() {
        for p in punctuation::PUNCTUATION {
            let kind = TokenKind::from_punctuation(p.id);
            let expected = punctuation::closing(p.id).map(TokenKind::from_punctuation);
            assert_eq!(kind.closing(), expected, "{kind}");
            if let Some(close) = expected {
                assert!(close.is_closing());
            }
        }
    }
}
