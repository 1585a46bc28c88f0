use proptest::prelude::*;
use sponsor_classifier::classify;
use sponsor_classifier::patterns::positive::POSITIVE_KEYWORDS;
use sponsor_core::normalize::normalize;

const RESTRICTIVE_PHRASES: &[&str] = &[
    "itar requirement",
    "us citizens only",
    "active security clearance",
    "we do not sponsor",
    "cpt students are not eligible",
    "must be a permanent resident",
];

// ── Classification is total ───────────────────────────────────────────────

proptest! {
    #[test]
    fn any_text_yields_a_verdict(text in "\\PC{0,200}") {
        let verdict = classify(&normalize(&text));
        prop_assert!(!verdict.reason.is_empty());
    }

    #[test]
    fn category_present_exactly_when_restricted(text in "[a-z .,-]{0,160}") {
        let verdict = classify(&normalize(&text));
        prop_assert_eq!(verdict.is_restricted, verdict.category.is_some());
    }
}

// ── Restrictive evidence outranks positive keywords ───────────────────────

proptest! {
    #[test]
    fn restriction_wins_over_positive_keyword(
        kw in prop::sample::select(POSITIVE_KEYWORDS),
        phrase in prop::sample::select(RESTRICTIVE_PHRASES),
        filler in "[a-z ]{0,40}",
        restriction_first in any::<bool>(),
    ) {
        let text = if restriction_first {
            format!("{phrase}. {filler} {kw}.")
        } else {
            format!("{kw}. {filler} {phrase}.")
        };
        let verdict = classify(&normalize(&text));
        prop_assert!(verdict.is_restricted, "not restricted: {}", text);
        prop_assert!(verdict.reason.starts_with('"'));
    }

    #[test]
    fn positive_keyword_alone_is_friendly(
        kw in prop::sample::select(POSITIVE_KEYWORDS),
        // No 'o': "no" would start a negated-sponsorship match.
        name in "[a-np-z]{3,10}",
    ) {
        let text = format!("{name} {kw} for the right candidate.");
        let verdict = classify(&normalize(&text));
        prop_assert!(!verdict.is_restricted, "restricted: {}", text);
        prop_assert!(verdict.category.is_none());
    }
}

// ── Case does not matter ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn verdict_ignores_case(text in "\\PC{0,200}") {
        let original = classify(&normalize(&text));
        let upper = classify(&normalize(&text.to_uppercase()));
        prop_assert_eq!(original, upper);
    }

    #[test]
    fn verdict_ignores_case_around_restrictive_phrases(
        phrase in prop::sample::select(RESTRICTIVE_PHRASES),
        word in "\\PL{1,12}",
    ) {
        let text = format!("{word} {phrase} {word}");
        let original = classify(&normalize(&text));
        let upper = classify(&normalize(&text.to_uppercase()));
        prop_assert!(original.is_restricted);
        prop_assert_eq!(original, upper);
    }
}
