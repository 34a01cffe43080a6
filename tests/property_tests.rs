//! Property-based tests for the nepl lexer and parser
//!
//! These tests use proptest to verify lexical invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use nepl::lexer::{TokenKind, TokenValue, lex};
use nepl::operators::OperatorSymbol;
use nepl::parser::parse_with_operators;
use nepl::{Float, Integer};
use proptest::prelude::*;

// Words that are neither numbers nor directives and contain no break or punctuation characters.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_+*<>=!?:-][a-zA-Z0-9_+*<>=!?:-]{0,8}"
}

fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

proptest! {
    /// Property: every whitespace-separated word is exactly one IDENTIFIER with that text
    #[test]
    fn words_lex_to_identifiers(
        words in prop::collection::vec(word_strategy(), 1..8),
        blanks in prop::collection::vec(blank_strategy(), 8),
    ) {
        let mut source = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                source.push_str(&blanks[i]);
            }
            source.push_str(word);
        }

        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(token.kind, TokenKind::Identifier);
            prop_assert_eq!(token.text(), Some(word.as_str()));
        }
    }

    /// Property: a digit string is one INTEGER with that value
    #[test]
    fn digit_strings_lex_to_integers(digits in "[0-9]{1,40}") {
        let tokens = lex(&digits).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Integer(Integer::from_decimal(&digits).unwrap()));
    }

    /// Property: `d+.d+` is one FLOAT with that value
    #[test]
    fn decimal_strings_lex_to_floats(whole in "[0-9]{1,20}", fraction in "[0-9]{1,20}") {
        let text = format!("{whole}.{fraction}");
        let tokens = lex(&text).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Float(Float::from_decimal(&text).unwrap()));
    }

    /// Property: `<digits>.<word>` is INTEGER, DOT, then the word
    #[test]
    fn integer_member_splits(digits in "[0-9]{1,10}", field in "[a-z_][a-z0-9_]{0,8}") {
        let tokens = lex(&format!("{digits}.{field}\n")).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        prop_assert_eq!(
            kinds,
            vec![TokenKind::Integer, TokenKind::Dot, TokenKind::Identifier, TokenKind::Semicolon]
        );
        prop_assert_eq!(tokens[2].text(), Some(field.as_str()));
    }

    /// Property: every token line lies within the source's line count
    #[test]
    fn token_lines_are_in_range(lines in prop::collection::vec("[a-z0-9 ().,]{0,12}", 1..6)) {
        let source = lines.join("\n");
        let last_line = u32::try_from(lines.len()).unwrap();
        let tokens = lex(&source).unwrap();
        for token in tokens {
            prop_assert!((1..=last_line).contains(&token.line), "{token} outside 1..={last_line}");
        }
    }

    /// Property: declaring then disabling the same symbol leaves the table empty,
    /// and a second disable fails
    #[test]
    fn declare_disable_round_trip(
        function in "[a-z]{1,6}",
        precedence in 0u32..1000,
        elements in prop::collection::vec(word_strategy(), 1..4),
    ) {
        let spelled = elements.join(" ");
        let source = format!("$OPERATOR {function} {precedence} {spelled}\n$UNOPERATOR {spelled}\n");
        let (_, operators) = parse_with_operators(&source).unwrap();
        prop_assert!(operators.is_empty());

        let twice = format!("{source}$UNOPERATOR {spelled}\n");
        let err = parse_with_operators(&twice).unwrap_err();
        prop_assert_eq!(err.message, "disabling undeclared operator");
        prop_assert_eq!(err.line, 3);
    }

    /// Property: a second declaration of the same symbol fails, whatever its function or precedence
    #[test]
    fn redeclare_fails(elements in prop::collection::vec(word_strategy(), 1..4), unary in any::<bool>()) {
        let elements = if unary { elements[..1].to_vec() } else { elements };
        let marker = if unary { "$UNARY " } else { "" };
        let spelled = elements.join(" ");
        let source = format!("$OPERATOR f {marker}1 {spelled}\n");
        let (_, operators) = parse_with_operators(&source).unwrap();
        prop_assert!(operators.contains(&OperatorSymbol::new(elements.clone(), unary)));

        let err = parse_with_operators(&format!("{source}$OPERATOR g {marker}2 {spelled}\n")).unwrap_err();
        prop_assert_eq!(err.message, "redeclaring operator");
    }
}
