//! Syntax front end for the nepl language: lexer, operator table, parser, AST, diagnostics.
//!
//! The grammar is not fixed: programs declare and disable operators inline with the `$OPERATOR`
//! and `$UNOPERATOR` directives, and the parser maintains the resulting [`operators::OperatorTable`]
//! while it reads statements.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not evaluate anything.
//! - Fixed vocabulary (punctuation, directives) and literal value types come from `nepl_core`.
//!
//! ## Examples
//! ```rust
//! use nepl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("print(1.5)\n").unwrap();
//! assert_eq!(tokens.len(), 5);
//!
//! let program = parser::parse("a.b(c, d[0])\n").unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod token_helpers;
