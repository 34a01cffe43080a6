//! nepl language vocabulary registries.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser.
//! Callers work with **stable IDs** (`PunctuationId`, `DirectiveId`) and look up spellings via the
//! registry tables.
//!
//! ## Examples
//! ```rust
//! use nepl_core::lang::directives::{self, DirectiveId};
//!
//! assert_eq!(directives::from_str("$UNARY"), Some(DirectiveId::Unary));
//! assert_eq!(directives::as_str(DirectiveId::Operator), "$OPERATOR");
//! ```

pub mod directives;
pub mod punctuation;
