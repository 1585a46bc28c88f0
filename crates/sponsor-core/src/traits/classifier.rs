use crate::models::Verdict;
use crate::normalize::{normalize, NormalizedText};

/// Sponsorship-restriction classification.
///
/// Implementations are pure: no shared mutable state, no memory of earlier
/// calls, safe to call from many threads at once.
pub trait IClassifier: Send + Sync {
    /// Classify already-normalized description text. Never fails.
    fn classify(&self, text: &NormalizedText) -> Verdict;

    /// Normalize `raw`, then classify it.
    fn classify_raw(&self, raw: &str) -> Verdict {
        self.classify(&normalize(raw))
    }
}
