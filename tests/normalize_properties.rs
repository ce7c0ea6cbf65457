use proptest::prelude::*;

use bookrec::normalize::{is_digit_token, normalize};
use bookrec::stopwords::ExclusionSet;
use bookrec::vectorize::Vectorizer;

proptest! {
    #[test]
    fn no_apostrophe_or_numeric_tokens(s in ".{0,200}") {
        for token in normalize(&s) {
            prop_assert!(!token.contains('\''), "apostrophe in {:?}", token);
            prop_assert!(!is_digit_token(&token), "numeric token {:?}", token);
        }
    }

    #[test]
    fn normalize_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(normalize(&s), normalize(&s));
    }

    #[test]
    fn never_adds_tokens(s in "[a-zA-Z0-9' \t]{0,200}") {
        prop_assert!(normalize(&s).len() <= s.split_whitespace().count());
    }

    #[test]
    fn analyzed_terms_skip_exclusions(s in "[a-zA-Z' ]{0,200}") {
        let vectorizer: Vectorizer = serde_json::from_str(r#"{"vocabulary": {}}"#).unwrap();
        let exclusions = ExclusionSet::english();
        for term in vectorizer.analyze(&s) {
            prop_assert!(!exclusions.contains(&term), "excluded term {:?}", term);
        }
    }
}

#[test]
fn normalize_empty_is_empty() {
    assert!(normalize("").is_empty());
}
