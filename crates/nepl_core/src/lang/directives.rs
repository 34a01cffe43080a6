//! `$`-directive vocabulary.
//!
//! Directives are reserved words that start with [`SIGIL`]. They never name values; instead they
//! instruct the parser to change the operator table while the program is being read.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `$operator` is an ordinary identifier.
//! - `$OPERATOR` and `$UNOPERATOR` are recognised by the lexer and become dedicated tokens;
//!   `$UNARY` stays an identifier token and is interpreted by the parser inside directives.

/// Prefix shared by every directive spelling.
pub const SIGIL: char = '$';

/// Stable identifier for directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveId {
    /// `$OPERATOR <function> [$UNARY] <precedence> <element>+`
    Operator,
    /// `$UNOPERATOR ($UNARY | <element>) <element>*`
    Unoperator,
    /// Marks the symbol of an operator directive as unary.
    Unary,
}

/// Metadata for a directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveInfo {
    pub id: DirectiveId,
    pub canonical: &'static str,
}

/// Registry of all directives.
pub const DIRECTIVES: &[DirectiveInfo] = &[
    DirectiveInfo {
        id: DirectiveId::Operator,
        canonical: "$OPERATOR",
    },
    DirectiveInfo {
        id: DirectiveId::Unoperator,
        canonical: "$UNOPERATOR",
    },
    DirectiveInfo {
        id: DirectiveId::Unary,
        canonical: "$UNARY",
    },
];

/// Return the full metadata entry for a directive.
pub fn info_for(id: DirectiveId) -> &'static DirectiveInfo {
    match id {
        DirectiveId::Operator => &DIRECTIVES[0],
        DirectiveId::Unoperator => &DIRECTIVES[1],
        DirectiveId::Unary => &DIRECTIVES[2],
    }
}

/// Return the canonical spelling for a directive.
pub fn as_str(id: DirectiveId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a spelling to a directive, if it is one.
pub fn from_str(s: &str) -> Option<DirectiveId> {
    if !s.starts_with(SIGIL) {
        return None;
    }
    DIRECTIVES.iter().find(|d| d.canonical == s).map(|d| d.id)
}

/// Return `true` if `s` is exactly the spelling of `id`.
pub fn is(s: &str, id: DirectiveId) -> bool {
    as_str(id) == s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_for_matches_id() {
        for d in DIRECTIVES {
            assert_eq!(info_for(d.id).id, d.id);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("$OPERATOR"), Some(DirectiveId::Operator));
        assert_eq!(from_str("$operator"), None);
        assert_eq!(from_str("OPERATOR"), None);
    }
}
