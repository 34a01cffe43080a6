/// Expression parsing methods.
///
/// An expression is a primary (name or literal) followed by any number of postfix steps:
/// `.member`, `(args...)` and `[index]`, applied left to right.
///
/// ## Notes
/// - Declared operators are not applied here; see `crate::operators`.
/// - Each method returns the tree together with its depth so that [`MAX_TREE_DEPTH`] can be
///   enforced without walking the tree again.
impl<I: Iterator<Item = char>> Parser<I> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<(Node, usize), SyntaxError> {
        let mut node = self.primary()?;
        let mut depth = 1;

        loop {
            match self.current.kind {
                TokenKind::Dot => {
                    self.advance()?;
                    let name = self.identifier("member identifier")?;
                    node = Node::member(name, node);
                    depth += 1;
                }
                TokenKind::LeftParenthesis => {
                    let (args, args_depth) = self.call_args()?;
                    node = Node::call(node, args);
                    depth = depth.max(args_depth) + 1;
                }
                TokenKind::LeftSquareBracket => {
                    self.open_bracket()?;
                    let (index, index_depth) = self.expression()?;
                    self.close_bracket()?;
                    node = Node::index(node, index);
                    depth = depth.max(index_depth) + 1;
                }
                _ => return Ok((node, depth)),
            }

            if depth > MAX_TREE_DEPTH {
                return Err(errors::expression_nested_too_deeply(self.current.line));
            }
        }
    }

    fn primary(&mut self) -> Result<Node, SyntaxError> {
        let token = match self.current.kind {
            TokenKind::Identifier | TokenKind::String | TokenKind::Integer | TokenKind::Float => self.advance()?,
            kind => return Err(SyntaxError::unexpected(kind, self.current.line)),
        };

        match (token.kind, token.value) {
            (TokenKind::Identifier, TokenValue::Text(name)) => Ok(Node::Name(name)),
            (TokenKind::String, TokenValue::Text(text)) => Ok(Node::Literal(Literal::String(text))),
            (TokenKind::Integer, TokenValue::Integer(value)) => Ok(Node::Literal(Literal::Integer(value))),
            (TokenKind::Float, TokenValue::Float(value)) => Ok(Node::Literal(Literal::Float(value))),
            (kind, _) => Err(SyntaxError::unexpected(kind, token.line)),
        }
    }

    /// Parse `( [expr (, expr)*] )`, returning the arguments and the depth of the deepest one.
    fn call_args(&mut self) -> Result<(Vec<Node>, usize), SyntaxError> {
        self.open_bracket()?;
        let mut args = Vec::new();
        let mut depth = 0;
        if self.check(TokenKind::RightParenthesis) {
            self.close_bracket()?;
            return Ok((args, depth));
        }

        loop {
            let (arg, arg_depth) = self.expression()?;
            args.push(arg);
            depth = depth.max(arg_depth);
            if self.check(TokenKind::Comma) {
                self.advance()?;
            } else {
                self.close_bracket()?;
                return Ok((args, depth));
            }
        }
    }
}
