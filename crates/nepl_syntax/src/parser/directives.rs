/// Operator directive parsing.
///
/// ```text
/// $OPERATOR   <function> [$UNARY] <precedence:INTEGER> <element>+ ;
/// $UNOPERATOR ($UNARY | <element>) <element>* ;
/// ```
///
/// Elements are identifier tokens, so any word that is not a number can spell an operator.
impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse `$OPERATOR ...` and add the declaration to the table.
    fn declare_operator(&mut self) -> Result<(), SyntaxError> {
        self.advance()?; // $OPERATOR
        let function = self.identifier("function identifier for operator declaration")?;

        let mut symbol = OperatorSymbol::default();
        let precedence = if self.check(TokenKind::Integer) {
            self.integer("integer precedence")?
        } else if self.check_directive(DirectiveId::Unary) {
            self.advance()?;
            symbol.is_unary = true;
            self.integer("integer precedence")?
        } else {
            return Err(self.expected("integer precedence or $UNARY directive"));
        };

        loop {
            symbol.push(self.identifier("element of operator symbol")?);
            if self.check(TokenKind::Semicolon) {
                break;
            }
        }

        let line = self.current.line;
        if symbol.is_unary && symbol.len() != 1 {
            return Err(errors::unary_operator_arity(symbol.len(), line));
        }

        self.operators
            .declare(symbol, OperatorDecl::new(function, precedence))
            .map_err(|e| operator_error(e, line))?;
        self.advance()?; // SEMICOLON
        Ok(())
    }

    /// Parse `$UNOPERATOR ...` and remove the symbol from the table.
    fn disable_operator(&mut self) -> Result<(), SyntaxError> {
        self.advance()?; // $UNOPERATOR

        let mut symbol = OperatorSymbol::default();
        let first = self.identifier("element of operator symbol or $UNARY directive")?;
        if directives::is(&first, DirectiveId::Unary) {
            symbol.is_unary = true;
        } else {
            symbol.push(first);
        }

        while !self.check(TokenKind::Semicolon) {
            symbol.push(self.identifier("element of operator symbol")?);
        }

        let line = self.current.line;
        self.operators.disable(&symbol).map_err(|e| operator_error(e, line))?;
        self.advance()?; // SEMICOLON
        Ok(())
    }
}

fn operator_error(error: OperatorError, line: u32) -> SyntaxError {
    match error {
        OperatorError::Redeclared(_) => errors::redeclaring_operator(line),
        OperatorError::Undeclared(_) => errors::disabling_undeclared_operator(line),
    }
}
