//! The lexer and the parser pull characters on demand, so they work on unbounded input.

use nepl_syntax::ast::Node;
use nepl_syntax::lexer::{Lexer, TokenKind};
use nepl_syntax::parser::Parser;

#[test]
fn parser_pulls_statements_from_endless_input() {
    let source = "$OPERATOR add 5 +\n$UNOPERATOR +\nx.y\n".chars().cycle();
    let mut parser = Parser::new(Lexer::new(source)).unwrap();

    for _ in 0..100 {
        let statement = parser.next_statement().unwrap();
        assert_eq!(statement, Some(Node::member("y", Node::name("x"))));
        assert!(parser.operators().is_empty());
    }
}

#[test]
fn lexer_pulls_tokens_from_endless_input() {
    let mut lexer = Lexer::new("a(1)\n".chars().cycle());
    let kinds: Vec<_> = (0..10).map(|_| lexer.next_token().unwrap().kind).collect();
    assert_eq!(&kinds[..5], &kinds[5..]);
    assert_eq!(kinds[4], TokenKind::Semicolon);
    assert_eq!(lexer.next_token().unwrap().line, 3);
}

#[test]
fn parser_iterator_collects_until_first_error() {
    let parser = Parser::new(Lexer::new("a\nb\nc)\nd\n".chars())).unwrap();
    let results: Vec<_> = parser.collect();
    assert_eq!(results.len(), 3);
    assert!(results[..2].iter().all(Result::is_ok));
    assert_eq!(results[2].as_ref().unwrap_err().message, "unexpected `RIGHT_PARENTHESIS`");
}
