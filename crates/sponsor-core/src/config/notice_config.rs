use serde::{Deserialize, Serialize};

use super::defaults;

/// Presentation settings for the verdict notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Maximum characters of the quoted reason shown to the user.
    pub reason_display_limit: usize,
    /// How long a restricted notice stays visible (seconds).
    pub restricted_display_secs: u32,
    /// How long a visa-friendly notice stays visible (seconds).
    pub friendly_display_secs: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            reason_display_limit: defaults::DEFAULT_REASON_DISPLAY_LIMIT,
            restricted_display_secs: defaults::DEFAULT_RESTRICTED_DISPLAY_SECS,
            friendly_display_secs: defaults::DEFAULT_FRIENDLY_DISPLAY_SECS,
        }
    }
}
