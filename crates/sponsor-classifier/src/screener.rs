use serde::{Deserialize, Serialize};
use sponsor_core::config::ScreeningConfig;
use sponsor_core::models::{JobPosting, Verdict};
use sponsor_core::normalize::normalize;
use sponsor_core::traits::IClassifier;
use sponsor_observability::screening_span;
use sponsor_observability::tracing_setup::events;

use crate::engine::ClassifierEngine;

/// Title shown when extraction found none.
pub const FALLBACK_TITLE: &str = "Job Title";
/// Company shown when extraction found none.
pub const FALLBACK_COMPANY: &str = "Company";

/// A classified posting, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub verdict: Verdict,
    pub title: String,
    pub company: String,
}

/// Gate in front of the classifier.
///
/// Analysis only runs when citizenship filtering is enabled. Each call is
/// independent: a host retrying extraction simply calls `screen` again with
/// the newer posting.
#[derive(Debug, Clone)]
pub struct Screener {
    enabled: bool,
    engine: ClassifierEngine,
}

impl Screener {
    pub fn new(config: &ScreeningConfig) -> Self {
        Self {
            enabled: config.filter_citizenship,
            engine: ClassifierEngine::from_config(config),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Classify `posting`, or `None` when filtering is disabled.
    ///
    /// A missing description is classified as empty text.
    pub fn screen(&self, posting: &JobPosting) -> Option<Screening> {
        if !self.enabled {
            events::screening_skipped();
            return None;
        }
        let span = screening_span!(posting.description.is_some());
        let _guard = span.enter();

        let verdict = self.engine.classify(&normalize(posting.description_text()));
        Some(Screening {
            verdict,
            title: display_or(posting.title.as_deref(), FALLBACK_TITLE),
            company: display_or(posting.company.as_deref(), FALLBACK_COMPANY),
        })
    }
}

fn display_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> Screener {
        Screener::new(&ScreeningConfig {
            filter_citizenship: true,
            ..ScreeningConfig::default()
        })
    }

    #[test]
    fn disabled_screener_skips_analysis() {
        let screener = Screener::new(&ScreeningConfig::default());
        assert!(!screener.is_enabled());
        assert!(screener.screen(&JobPosting::new("US citizens only")).is_none());
    }

    #[test]
    fn blank_title_and_company_fall_back() {
        let posting = JobPosting::new("We will sponsor").with_title("   ");
        let screening = enabled().screen(&posting).unwrap();
        assert_eq!(screening.title, FALLBACK_TITLE);
        assert_eq!(screening.company, FALLBACK_COMPANY);
    }

    #[test]
    fn missing_description_is_no_signal() {
        let screening = enabled().screen(&JobPosting::default()).unwrap();
        assert_eq!(screening.verdict, Verdict::no_signal());
    }
}
