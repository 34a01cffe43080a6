/// Token-stream helpers and bracket bookkeeping.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`) and expecting specific kinds
/// - Diagnostics for the current token
/// - The open-bracket stack (`open_bracket`, `close_bracket`)
impl<I: Iterator<Item = char>> Parser<I> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// ``expected `<what>`, found `<current token>` `` at the current line.
    fn expected(&self, what: impl std::fmt::Display) -> SyntaxError {
        SyntaxError::expected(what, describe(&self.current), self.current.line)
    }

    /// Consume an identifier and return its text.
    fn identifier(&mut self, what: &str) -> Result<Ident, SyntaxError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.expected(what));
        }
        match self.advance()?.value {
            TokenValue::Text(name) => Ok(name),
            _ => Err(self.expected(what)),
        }
    }

    /// Consume an integer literal and return its value.
    fn integer(&mut self, what: &str) -> Result<Integer, SyntaxError> {
        if !self.check(TokenKind::Integer) {
            return Err(self.expected(what));
        }
        match self.advance()?.value {
            TokenValue::Integer(value) => Ok(value),
            _ => Err(self.expected(what)),
        }
    }

    /// Return `true` if the current token is the identifier spelling of a directive.
    fn check_directive(&self, id: DirectiveId) -> bool {
        self.current.is_identifier(directives::as_str(id))
    }

    // ========================================================================
    // Brackets
    // ========================================================================

    /// Consume an opening delimiter and remember it.
    ///
    /// ## Errors
    /// `brackets nested too deeply` once [`MAX_BRACKET_NESTING`] brackets are open.
    fn open_bracket(&mut self) -> Result<(), SyntaxError> {
        if !self.current.kind.is_opening() {
            return Err(SyntaxError::unexpected(self.current.kind, self.current.line));
        }
        if self.brackets.len() >= MAX_BRACKET_NESTING {
            return Err(errors::brackets_nested_too_deeply(self.current.line));
        }
        let open = self.advance()?;
        self.brackets.push(open);
        Ok(())
    }

    /// Consume the delimiter that closes the innermost open bracket.
    ///
    /// ## Errors
    /// - ``unexpected `<kind>` `` if nothing is open.
    /// - ``expected `<closing kind>`, found `<token>` `` for a mismatched closer or any other token.
    fn close_bracket(&mut self) -> Result<(), SyntaxError> {
        let Some(expected) = self.brackets.last().and_then(|open| open.kind.closing()) else {
            return Err(SyntaxError::unexpected(self.current.kind, self.current.line));
        };
        if !self.check(expected) {
            return Err(self.expected(expected));
        }
        self.brackets.pop();
        self.advance()?;
        Ok(())
    }
}

/// Render a token for the `found` half of a diagnostic: the kind, plus the value if it has one.
fn describe(token: &Token) -> String {
    match &token.value {
        TokenValue::Empty => token.kind.to_string(),
        value => format!("{} {}", token.kind, value),
    }
}
