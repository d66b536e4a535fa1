//! Property-based tests for the tokenizer.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use cinder_lexer::{tokenize, Token, TokenKind, Tokenizer};
use proptest::prelude::*;

// -- Strategies --

fn whitespace_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b' '), Just(b'\t'), Just(b'\n'), Just(b'\r')],
        0..256,
    )
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,31}").expect("valid regex")
}

/// Bytes biased toward the characters the scanners branch on.
fn c_like_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![
            4 => any::<u8>(),
            4 => prop::sample::select(b"abz_09.\"'\\/*-+=!<>&|(){}[];,\n x".to_vec()),
        ],
        0..256,
    )
}

// -- Properties --

proptest! {
    #[test]
    fn whitespace_only_yields_single_eof(bytes in whitespace_strategy()) {
        let tokens = tokenize(&bytes).unwrap();
        let newlines = bytes.iter().filter(|&&b| b == b'\n' || b == b'\r').count();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Eof);
        prop_assert_eq!(tokens[0].line as usize, 1 + newlines);
    }

    #[test]
    fn identifier_round_trips(name in identifier_strategy()) {
        let tokens = tokenize(name.as_bytes()).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(name.clone()));
        prop_assert_eq!(tokens[0].span.len(), name.len());
    }

    #[test]
    fn integer_round_trips(value in any::<u64>()) {
        let tokens = tokenize(value.to_string().as_bytes()).unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Int(value));
    }

    #[test]
    fn never_panics_and_tokens_are_ordered(bytes in c_like_bytes()) {
        let Ok(tokens) = tokenize(&bytes) else {
            return Ok(());
        };
        prop_assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
            prop_assert!(pair[0].line <= pair[1].line);
        }
        prop_assert!(tokens.iter().all(|t| t.span.end <= bytes.len()));
    }

    #[test]
    fn iterator_agrees_with_tokenize(bytes in c_like_bytes()) {
        let batch = tokenize(&bytes);
        let streamed: Result<Vec<Token>, _> = Tokenizer::new(&bytes).collect();
        match (batch, streamed) {
            (Ok(mut batch), Ok(streamed)) => {
                batch.pop();
                prop_assert_eq!(batch, streamed);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "mismatch: {:?} vs {:?}", a, b),
        }
    }
}
