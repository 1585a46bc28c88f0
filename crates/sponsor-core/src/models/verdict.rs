use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::RestrictionCategory;

/// Reason given when no positive, restrictive, or work-authorization signal
/// is present.
pub const NO_SIGNAL_REASON: &str = "No visa restrictions detected";

/// Reason given when a work-authorization phrase is present with no nearby
/// exclusion.
pub const WORK_AUTH_ONLY_REASON: &str = "Work authorization required, no restrictions found";

/// Outcome of classifying one job description.
///
/// `category` is present only when `is_restricted` is true. The presentation
/// layer may shorten `reason` for display but must not change its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Verdict {
    pub is_restricted: bool,
    /// Quoted evidence, or a fixed explanatory sentence.
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<RestrictionCategory>,
}

impl Verdict {
    /// A verdict that does not restrict the posting.
    pub fn unrestricted(reason: impl Into<String>) -> Self {
        Self {
            is_restricted: false,
            reason: reason.into(),
            category: None,
        }
    }

    /// A restrictive verdict carrying its category.
    pub fn restricted(reason: impl Into<String>, category: RestrictionCategory) -> Self {
        Self {
            is_restricted: true,
            reason: reason.into(),
            category: Some(category),
        }
    }

    /// The fall-through verdict when nothing matched.
    pub fn no_signal() -> Self {
        Self::unrestricted(NO_SIGNAL_REASON)
    }

    /// Wrap evidence text in straight double quotes.
    pub fn quote(text: &str) -> String {
        format!("\"{text}\"")
    }
}
