//! Property-based tests for the combinators.

use proptest::prelude::*;

use super::{Split, Unwrap};
use crate::entry::{Constant, Entry};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Joining the tokens with the delimiter gives back the original text
    #[test]
    fn split_then_join_is_identity(text in ".{0,40}", delimiter in "[;:,.|]{1,2}") {
        let tokens = Split::new(Constant::new(text.clone()), delimiter.as_str())
            .value()
            .unwrap();
        prop_assert_eq!(tokens.join(&delimiter), text);
    }

    // No token contains the delimiter
    #[test]
    fn split_tokens_exclude_delimiter(text in "[a-c;]{0,30}") {
        let tokens = Split::semicolon(Constant::new(text)).value().unwrap();
        prop_assert!(tokens.iter().all(|token| !token.contains(';')));
    }

    // Wrapping text in braces and unwrapping it returns the text
    #[test]
    fn unwrap_recovers_inner_text(inner in "[^}]{0,30}", tail in ".{0,10}") {
        let value = format!("{{{inner}}}{tail}");
        prop_assert_eq!(Unwrap::braces(value).value().unwrap(), inner);
    }
}
