//! Operator table maintained by the `$OPERATOR` / `$UNOPERATOR` directives.
//!
//! An operator is identified by its [`OperatorSymbol`]: the ordered words it is spelled with and
//! whether it is unary. Each declared symbol maps to an [`OperatorDecl`] naming the function it
//! stands for and its precedence (smaller binds tighter).
//!
//! ## Notes
//! - Lookup is exact on `(is_unary, elements)`; there is no prefix matching.
//! - The table only records declarations. Expression parsing does not consult it yet.

use std::collections::BTreeMap;
use std::fmt;

use nepl_core::Integer;
use nepl_core::lang::directives::{self, DirectiveId};
use thiserror::Error;

use crate::ast::Ident;

/// Surface spelling of an operator.
///
/// Field order matters: the derived ordering is lexicographic on `(is_unary, elements)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OperatorSymbol {
    pub is_unary: bool,
    pub elements: Vec<Ident>,
}

impl OperatorSymbol {
    pub fn new(elements: Vec<Ident>, is_unary: bool) -> Self {
        Self { is_unary, elements }
    }

    pub fn unary(element: impl Into<Ident>) -> Self {
        Self::new(vec![element.into()], true)
    }

    pub fn binary(elements: impl IntoIterator<Item = impl Into<Ident>>) -> Self {
        Self::new(elements.into_iter().map(Into::into).collect(), false)
    }

    /// Number of elements (1 for unary and binary operators, 2 for ternary ones, ...).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: impl Into<Ident>) {
        self.elements.push(element.into());
    }
}

/// Directive-style spelling: `$UNARY -`, `? :`.
impl fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if self.is_unary {
            f.write_str(directives::as_str(DirectiveId::Unary))?;
            sep = " ";
        }
        for element in &self.elements {
            write!(f, "{sep}{element}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// What a declared operator stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDecl {
    /// Name of the function the operator applies
    pub function: Ident,
    /// Smaller number means higher precedence
    pub precedence: Integer,
}

impl OperatorDecl {
    pub fn new(function: impl Into<Ident>, precedence: Integer) -> Self {
        Self {
            function: function.into(),
            precedence,
        }
    }
}

/// Error raised by [`OperatorTable`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("redeclaring operator")]
    Redeclared(OperatorSymbol),

    #[error("disabling undeclared operator")]
    Undeclared(OperatorSymbol),
}

/// Declared operators, ordered by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
    entries: BTreeMap<OperatorSymbol, OperatorDecl>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    ///
    /// ## Errors
    /// [`OperatorError::Redeclared`] if `symbol` is already declared; the table is left unchanged.
    pub fn declare(&mut self, symbol: OperatorSymbol, decl: OperatorDecl) -> Result<(), OperatorError> {
        if self.entries.contains_key(&symbol) {
            return Err(OperatorError::Redeclared(symbol));
        }
        tracing::debug!(%symbol, function = %decl.function, precedence = %decl.precedence, "declare operator");
        self.entries.insert(symbol, decl);
        Ok(())
    }

    /// Remove a declaration and return it.
    ///
    /// ## Errors
    /// [`OperatorError::Undeclared`] if `symbol` is not declared.
    pub fn disable(&mut self, symbol: &OperatorSymbol) -> Result<OperatorDecl, OperatorError> {
        match self.entries.remove(symbol) {
            Some(decl) => {
                tracing::debug!(%symbol, "disable operator");
                Ok(decl)
            }
            None => Err(OperatorError::Undeclared(symbol.clone())),
        }
    }

    pub fn get(&self, symbol: &OperatorSymbol) -> Option<&OperatorDecl> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &OperatorSymbol) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in symbol order: binary symbols first, then unary ones.
    pub fn iter(&self) -> impl Iterator<Item = (&OperatorSymbol, &OperatorDecl)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(function: &str, precedence: i64) -> OperatorDecl {
        OperatorDecl::new(function, Integer::from(precedence))
    }

    #[test]
    fn test_declare_then_disable_leaves_table_empty() {
        let mut table = OperatorTable::new();
        let plus = OperatorSymbol::binary(["+"]);
        table.declare(plus.clone(), decl("add", 5)).unwrap();
        assert_eq!(table.get(&plus), Some(&decl("add", 5)));

        let removed = table.disable(&plus).unwrap();
        assert_eq!(removed.function, "add");
        assert!(table.is_empty());

        assert_eq!(table.disable(&plus), Err(OperatorError::Undeclared(plus.clone())));
    }

    #[test]
    fn test_redeclare_fails_and_keeps_first() {
        let mut table = OperatorTable::new();
        let neg = OperatorSymbol::unary("-");
        table.declare(neg.clone(), decl("negate", 1)).unwrap();
        let err = table.declare(neg.clone(), decl("other", 2)).unwrap_err();
        assert_eq!(err.to_string(), "redeclaring operator");
        assert_eq!(table.get(&neg).unwrap().function, "negate");
    }

    #[test]
    fn test_unary_and_binary_symbols_are_distinct() {
        let mut table = OperatorTable::new();
        table.declare(OperatorSymbol::unary("-"), decl("negate", 1)).unwrap();
        table.declare(OperatorSymbol::binary(["-"]), decl("sub", 5)).unwrap();
        assert_eq!(table.len(), 2);

        let order: Vec<_> = table.iter().map(|(s, _)| s.is_unary).collect();
        assert_eq!(order, vec![false, true]);
    }

    #[test]
    fn test_symbol_ordering() {
        let a = OperatorSymbol::binary(["?", ":"]);
        let b = OperatorSymbol::binary(["+"]);
        let c = OperatorSymbol::unary("!");
        assert!(b < a);
        assert!(a < c);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(OperatorSymbol::unary("-").to_string(), "$UNARY -");
        assert_eq!(OperatorSymbol::binary(["?", ":"]).to_string(), "? :");
    }
}
