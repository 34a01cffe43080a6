//! Token types for the nepl lexer.
//!
//! A [`Token`] is a kind tag, a value and the source line. The value tag always agrees with the
//! kind; use the constructors instead of building tokens field by field:
//! - `IDENTIFIER` / `STRING` carry [`TokenValue::Text`]
//! - `INTEGER` carries [`TokenValue::Integer`], `FLOAT` carries [`TokenValue::Float`]
//! - punctuation and directive tokens carry [`TokenValue::Empty`]

use std::fmt;

use nepl_core::{Float, Integer};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Words and literals ==========
    Identifier,
    String,
    Integer,
    Float,

    // ========== Delimiters (opening kind is followed by its closing kind) ==========
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    LeftBrace,
    RightBrace,

    // ========== Separators / access ==========
    /// `;` or an end of line without a continuation backslash.
    Semicolon,
    Comma,
    Dot,

    // ========== Directives ==========
    Operator,
    Unoperator,
}

impl TokenKind {
    /// Upper-snake name used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Unoperator => "UNOPERATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value carried by a token, dictated by its [`TokenKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Text(String),
    Integer(Integer),
    Float(Float),
    Empty,
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Integer(i) => write!(f, "{i}"),
            TokenValue::Float(x) => write!(f, "{x}"),
            TokenValue::Empty => Ok(()),
        }
    }
}

/// A token with its kind, value and 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
}

impl Token {
    pub fn identifier(text: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(text.into()),
            line,
        }
    }

    pub fn string(text: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::String,
            value: TokenValue::Text(text.into()),
            line,
        }
    }

    pub fn integer(value: Integer, line: u32) -> Self {
        Self {
            kind: TokenKind::Integer,
            value: TokenValue::Integer(value),
            line,
        }
    }

    pub fn float(value: Float, line: u32) -> Self {
        Self {
            kind: TokenKind::Float,
            value: TokenValue::Float(value),
            line,
        }
    }

    /// Construct a value-less token (punctuation or directive).
    ///
    /// ## Notes
    /// - Only call this with kinds that carry no value; see the module docs.
    pub fn simple(kind: TokenKind, line: u32) -> Self {
        debug_assert!(!kind.has_value(), "{kind} requires a value");
        Self {
            kind,
            value: TokenValue::Empty,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.line)?;
        match &self.value {
            TokenValue::Empty => Ok(()),
            value => write!(f, ": {value}"),
        }
    }
}
