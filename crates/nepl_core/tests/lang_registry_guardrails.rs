use std::collections::HashMap;

use nepl_core::lang::directives::{self, SIGIL};
use nepl_core::lang::punctuation;

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<char, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_char(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {:?}",
            info.canonical
        );
        assert_eq!(
            punctuation::as_char(info.id),
            info.canonical,
            "punctuation as_char mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_does_not_overlap_word_characters() {
    // Every punctuator except `.` must also break a bare word, otherwise `f(x)` would lex as one word.
    for info in punctuation::PUNCTUATION {
        let breaks = punctuation::is_break_char(info.canonical);
        if info.id == punctuation::PunctuationId::Dot {
            assert!(!breaks);
        } else {
            assert!(breaks, "{:?} must be a break character", info.canonical);
        }
    }
}

#[test]
fn directives_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, directives::DirectiveId> = HashMap::new();

    for info in directives::DIRECTIVES {
        assert!(
            info.canonical.starts_with(SIGIL),
            "directive {:?} must start with the sigil",
            info.canonical
        );
        assert_eq!(
            directives::from_str(info.canonical),
            Some(info.id),
            "directive spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(directives::as_str(info.id), info.canonical);
        assert!(
            info.canonical.chars().all(|c| !c.is_whitespace() && !punctuation::is_break_char(c)),
            "directive {:?} must lex as a single word",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate directive spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}
