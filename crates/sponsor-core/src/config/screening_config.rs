use serde::{Deserialize, Serialize};

use super::defaults;

/// Screening subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Run the classifier at all. Owned by the settings store; when false
    /// postings are never analyzed.
    pub filter_citizenship: bool,
    /// Characters kept on each side of a work-authorization match when
    /// looking for nearby exclusions.
    pub context_window_chars: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            filter_citizenship: defaults::DEFAULT_FILTER_CITIZENSHIP,
            context_window_chars: defaults::DEFAULT_CONTEXT_WINDOW_CHARS,
        }
    }
}
