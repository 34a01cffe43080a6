/// Parse source text into a [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`] from the lexer or the parser.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    parse_with_operators(source).map(|(program, _)| program)
}

/// Parse source text and also return the operator table left by its directives.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with_operators(source: &str) -> Result<(Program, OperatorTable), SyntaxError> {
    let mut parser = Parser::new(Lexer::new(source.chars()))?;
    let statements = parser.statements()?;
    let operators = parser.into_operators();
    tracing::debug!(statements = statements.len(), operators = operators.len(), "parsed program");
    Ok((Program { statements }, operators))
}
