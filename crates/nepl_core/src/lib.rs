//! Provide shared, pure helpers and canonical language vocabulary for the nepl front end.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the arbitrary-precision literal value types ([`Integer`], [`Float`]) carried by tokens and AST literals, and
//! - registry tables for the fixed parts of the surface syntax (punctuation, `$`-directives).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no lexer/parser types.
//! - Operator spellings are *not* part of the vocabulary: programs declare their own operators at parse time.

pub mod lang;
pub mod numeric;

pub use numeric::{Float, Integer, NumericError};
