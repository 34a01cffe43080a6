#![forbid(unsafe_code)]
//! nepl interpreter front end
//!
//! Turns nepl source text into a token stream and then into one expression tree per statement,
//! executing `$OPERATOR` / `$UNOPERATOR` directives along the way. The work is done by the
//! `nepl_syntax` crate; this crate re-exports it and hosts the command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use nepl_syntax::ast;
pub use nepl_syntax::diagnostics;
pub use nepl_syntax::lexer;
pub use nepl_syntax::operators;
pub use nepl_syntax::parser;

pub use nepl_core::{Float, Integer};
pub use nepl_syntax::diagnostics::SyntaxError;
