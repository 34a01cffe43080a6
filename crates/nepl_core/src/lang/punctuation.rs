//! Punctuation vocabulary.
//!
//! This module defines the canonical set of single-character punctuators recognised by the lexer:
//! the three paired delimiters, the statement separator, the argument separator and the member
//! access dot. It also owns the set of *break characters* that end a bare word.
//!
//! ## Notes
//! - Every punctuator is exactly one character; there are no multi-character spellings.
//! - This module is vocabulary only. It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use nepl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('['), Some(PunctuationId::LBracket));
//! assert_eq!(punctuation::closing(PunctuationId::LBracket), Some(PunctuationId::RBracket));
//! assert!(punctuation::is_break_char('#'));
//! assert!(!punctuation::is_break_char('.'));
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// `;` and `,`.
    Separator,
    /// The member access `.`.
    Access,
}

/// Stable identifier for punctuation tokens.
///
/// The declaration order matches [`PUNCTUATION`]; each opening delimiter is immediately followed by
/// its closing counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Dot,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LParen, '(', PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ')', PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, '[', PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, ']', PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, '{', PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, '}', PunctuationCategory::Delimiter),
    // Separators
    info(PunctuationId::Semicolon, ';', PunctuationCategory::Separator),
    info(PunctuationId::Comma, ',', PunctuationCategory::Separator),
    // Access
    info(PunctuationId::Dot, '.', PunctuationCategory::Access),
];

/// Characters that terminate a bare word (identifier, number, directive).
///
/// `.` is deliberately absent: a word may contain one decimal point, and the lexer decides
/// whether a dot belongs to a float literal or starts a member access.
pub const BREAK_CHARS: &[char] = &['"', '\'', '#', '\\', '(', ')', '[', ']', '{', '}', ';', ','];

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Return the canonical spelling for a punctuation token.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Resolve a punctuation character to its identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

/// Return the closing delimiter paired with an opening delimiter.
///
/// Returns `None` for anything that is not an opening delimiter.
pub fn closing(id: PunctuationId) -> Option<PunctuationId> {
    match id {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

/// Return `true` if `c` ends a bare word.
pub fn is_break_char(c: char) -> bool {
    BREAK_CHARS.contains(&c)
}

const fn info(id: PunctuationId, canonical: char, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
