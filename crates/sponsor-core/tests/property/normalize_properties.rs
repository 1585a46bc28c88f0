use proptest::prelude::*;
use sponsor_core::normalize;

// ASCII plus the whitespace and curly-quote variants the normalizer folds.
const TEXTISH: &str = "[ -~\\n\\t\\r\u{00A0}\u{2018}\u{2019}\u{201C}\u{201D}]{0,300}";

proptest! {
    #[test]
    fn normalization_is_idempotent(text in TEXTISH) {
        let once = normalize(&text);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_text_has_no_uppercase_or_whitespace_runs(text in TEXTISH) {
        let n = normalize(&text);
        prop_assert!(!n.chars().any(|c| c.is_uppercase()));
        prop_assert!(!n.contains("  "));
        prop_assert!(!n.contains('\n'));
        prop_assert_eq!(n.trim(), n.as_str());
    }

    #[test]
    fn normalization_ignores_case(text in "\\PC{0,200}") {
        prop_assert_eq!(normalize(&text), normalize(&text.to_uppercase()));
    }

    #[test]
    fn normalization_is_idempotent_for_any_text(text in "\\PC{0,200}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn normalization_is_total(text in ".{0,200}") {
        let _ = normalize(&text);
    }
}
