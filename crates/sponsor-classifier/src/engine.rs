use sponsor_core::config::{defaults, ScreeningConfig};
use sponsor_core::models::{RestrictionCategory, Verdict, WORK_AUTH_ONLY_REASON};
use sponsor_core::normalize::NormalizedText;
use sponsor_core::traits::IClassifier;
use sponsor_observability::classify_span;
use sponsor_observability::tracing_setup::events;

use crate::context::context_window;
use crate::degradation::DegradationTracker;
use crate::evidence::clean_evidence;
use crate::patterns::positive;
use crate::patterns::restrictive::RESTRICTIVE;
use crate::patterns::work_auth::{AUTHORIZATION, EXCLUSIONS};
use crate::patterns::{Rule, RuleTable};

/// Rule-based sponsorship-restriction classifier.
///
/// Decision order, first match wins:
/// 1. positive keyword scan (recorded, not yet decisive),
/// 2. restrictive pattern scan across all groups,
/// 3. restrictive hit → restricted; else positive hit → unrestricted,
/// 4. work-authorization phrase → look for exclusions in its context window,
/// 5. nothing → unrestricted, no signal.
///
/// Implements `IClassifier` from sponsor-core. Holds no mutable state; one
/// engine can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ClassifierEngine {
    /// Characters on each side of a work-authorization match to re-scan.
    context_radius: usize,
}

impl ClassifierEngine {
    pub fn new() -> Self {
        Self {
            context_radius: defaults::DEFAULT_CONTEXT_WINDOW_CHARS,
        }
    }

    pub fn with_context_radius(context_radius: usize) -> Self {
        Self { context_radius }
    }

    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self::with_context_radius(config.context_window_chars)
    }

    pub fn context_radius(&self) -> usize {
        self.context_radius
    }

    /// Classify with degradation tracking. Returns the tracker alongside the
    /// verdict so callers can audit skipped rules.
    pub fn classify_with_tracking(&self, text: &NormalizedText) -> (Verdict, DegradationTracker) {
        let span = classify_span!(text.len());
        let _guard = span.enter();

        let mut tracker = DegradationTracker::new();
        check_pattern_health(&RESTRICTIVE, &mut tracker);
        check_pattern_health(&AUTHORIZATION, &mut tracker);
        check_pattern_health(&EXCLUSIONS, &mut tracker);

        let verdict = self.decide(text.as_str());
        events::verdict_reached(
            verdict.is_restricted,
            verdict.category.map(RestrictionCategory::name),
            &verdict.reason,
        );
        (verdict, tracker)
    }

    fn decide(&self, text: &str) -> Verdict {
        let positive = positive::first_keyword(text);
        if let Some(keyword) = positive {
            events::positive_keyword_found(keyword);
        }

        // Restriction dominates a positive keyword.
        if let Some(hit) = RESTRICTIVE.first_match(text) {
            let category = hit.rule.category;
            events::restrictive_pattern_found(hit.rule.name, category.name(), hit.matched);
            return Verdict::restricted(Verdict::quote(&clean_evidence(hit.matched)), category);
        }

        if let Some(keyword) = positive {
            return Verdict::unrestricted(Verdict::quote(keyword));
        }

        self.work_authorization_scan(text)
            .unwrap_or_else(Verdict::no_signal)
    }

    /// Contextual scan: only the first authorization phrase is considered,
    /// and only exclusions inside its window count.
    fn work_authorization_scan(&self, text: &str) -> Option<Verdict> {
        let hit = AUTHORIZATION.first_match(text)?;
        events::work_authorization_found(hit.rule.name, hit.matched);

        let window = context_window(text, hit.start, hit.end, self.context_radius);
        let verdict = match EXCLUSIONS.first_match(window) {
            Some(exclusion) => {
                events::work_authorization_exclusion_found(
                    exclusion.rule.name,
                    exclusion.matched,
                );
                Verdict::restricted(
                    Verdict::quote(exclusion.matched),
                    RestrictionCategory::WorkAuthorizationRestriction,
                )
            }
            None => Verdict::unrestricted(WORK_AUTH_ONLY_REASON),
        };
        Some(verdict)
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IClassifier for ClassifierEngine {
    fn classify(&self, text: &NormalizedText) -> Verdict {
        let (verdict, _tracker) = self.classify_with_tracking(text);
        verdict
    }
}

/// Classify with a default engine.
pub fn classify(text: &NormalizedText) -> Verdict {
    ClassifierEngine::new().classify(text)
}

/// Record rules that failed to compile in the tracker.
fn check_pattern_health<R: Rule>(table: &RuleTable<R>, tracker: &mut DegradationTracker) {
    for rule in table.failed_rules() {
        events::pattern_degraded(rule.name(), table.label());
        tracker.record_failure(rule.name(), table.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sponsor_core::normalize::normalize;

    fn run(raw: &str) -> Verdict {
        classify(&normalize(raw))
    }

    #[test]
    fn positive_keyword_alone_is_unrestricted() {
        let v = run("We will sponsor H1B visas for qualified candidates.");
        assert_eq!(v, Verdict::unrestricted("\"will sponsor\""));
    }

    #[test]
    fn restriction_dominates_positive() {
        let v = run("We can sponsor some roles, but US citizens only for this one.");
        assert!(v.is_restricted);
        assert_eq!(v.category, Some(RestrictionCategory::UsCitizenshipRequired));
    }

    #[test]
    fn long_restrictive_match_is_shortened() {
        let v = run(
            "This position is subject to the export control rules of the federal \
             government, including ITAR.",
        );
        assert_eq!(v.category, Some(RestrictionCategory::ItarExportControl));
        assert_eq!(v.reason, "\"ITAR requirement\"");
    }

    #[test]
    fn work_authorization_without_exclusion() {
        let v = run("Candidates must be legally authorized to work in the US.");
        assert_eq!(v, Verdict::unrestricted(WORK_AUTH_ONLY_REASON));
    }

    #[test]
    fn work_authorization_with_nearby_exclusion() {
        let v = run(
            "Candidates must be legally authorized to work in the US. \
             Green card holders and citizens are the only eligible applicants.",
        );
        assert_eq!(
            v,
            Verdict::restricted(
                "\"citizens are the only\"",
                RestrictionCategory::WorkAuthorizationRestriction
            )
        );
    }

    #[test]
    fn exclusion_outside_window_is_ignored() {
        let filler = "we value curiosity and teamwork. ".repeat(10);
        let text = format!(
            "Candidates must be legally authorized to work in the US. {filler}\
             Green card holders and citizens are the only eligible applicants."
        );
        assert_eq!(run(&text), Verdict::unrestricted(WORK_AUTH_ONLY_REASON));

        let wide = ClassifierEngine::with_context_radius(1_000);
        assert!(wide.classify(&normalize(&text)).is_restricted);
    }

    #[test]
    fn context_radius_follows_config() {
        assert_eq!(ClassifierEngine::new().context_radius(), 200);
        let config = ScreeningConfig {
            context_window_chars: 40,
            ..ScreeningConfig::default()
        };
        assert_eq!(ClassifierEngine::from_config(&config).context_radius(), 40);
    }

    #[test]
    fn empty_text_has_no_signal() {
        assert_eq!(run(""), Verdict::no_signal());
    }

    #[test]
    fn tracking_reports_no_failures_for_builtin_rules() {
        let (_, tracker) = ClassifierEngine::new().classify_with_tracking(&normalize("text"));
        assert!(!tracker.has_failures());
    }
}
