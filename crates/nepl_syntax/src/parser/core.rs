/// Parser core type and the statement loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - Per statement the parser either runs a directive, skips an empty statement, or parses one
///   expression that must be followed by `SEMICOLON`. It stops once the lexer is exhausted.

/// Maximum number of simultaneously open brackets.
pub const MAX_BRACKET_NESTING: usize = 256;

/// Maximum depth of one statement's tree (a leaf has depth 1).
pub const MAX_TREE_DEPTH: usize = 1024;

/// Parser state.
///
/// ## Notes
/// - There is no error recovery: after an error the parser must not be used further
///   (the [`Iterator`] impl yields nothing after the first error).
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    /// Lookahead token
    current: Token,
    /// Opening delimiters not yet closed, innermost last
    brackets: Vec<Token>,
    operators: OperatorTable,
    failed: bool,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a parser and read the first lookahead token.
    pub fn new(mut lexer: Lexer<I>) -> Result<Self, SyntaxError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            brackets: Vec::new(),
            operators: OperatorTable::new(),
            failed: false,
        })
    }

    /// Operators declared so far.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn into_operators(self) -> OperatorTable {
        self.operators
    }

    /// Parse up to and including the next expression statement.
    ///
    /// Directives and empty statements before it are processed on the way.
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_statement(&mut self) -> Result<Option<Node>, SyntaxError> {
        loop {
            match self.current.kind {
                TokenKind::Operator => self.declare_operator()?,
                TokenKind::Unoperator => self.disable_operator()?,
                TokenKind::Semicolon => {
                    if self.lexer.is_exhausted() {
                        return Ok(None);
                    }
                    self.advance()?;
                }
                _ => {
                    let (node, _) = self.expression()?;
                    self.end_statement()?;
                    return Ok(Some(node));
                }
            }
        }
    }

    /// Parse every remaining statement.
    pub fn statements(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut statements = Vec::new();
        while let Some(statement) = self.next_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Require the statement separator after an expression.
    fn end_statement(&mut self) -> Result<(), SyntaxError> {
        match self.current.kind {
            TokenKind::Semicolon => {
                self.advance()?;
                Ok(())
            }
            kind if kind.is_closing() => Err(SyntaxError::unexpected(kind, self.current.line)),
            _ => Err(self.expected(TokenKind::Semicolon)),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Parser<I> {
    type Item = Result<Node, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.next_statement().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}
