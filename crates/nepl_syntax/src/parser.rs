//! Parser for the nepl programming language
//!
//! Pulls tokens from a [`Lexer`] one at a time (one token of lookahead) and produces one expression
//! tree per statement. `$OPERATOR` / `$UNOPERATOR` directives are executed inline: they update the
//! parser's [`OperatorTable`] and produce no statement.
//!
//! ## Examples
//!
//! ```rust
//! use nepl_syntax::parser;
//!
//! let source = "$OPERATOR add 5 +\nprint(x.y, z[0])\n";
//! let (program, operators) = parser::parse_with_operators(source).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! assert_eq!(operators.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{SyntaxError, errors};
use crate::lexer::{Lexer, Token, TokenKind, TokenValue};
use crate::operators::{OperatorDecl, OperatorError, OperatorSymbol, OperatorTable};
use nepl_core::Integer;
use nepl_core::lang::directives::{self, DirectiveId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/directives.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
