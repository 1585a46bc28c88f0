//! Presentation model for a screening result.
//!
//! Rendering belongs to the host; this only decides what to say. The
//! verdict's meaning is never changed, its reason is only capped in length.

use serde::{Deserialize, Serialize};
use sponsor_core::config::NoticeConfig;
use sponsor_core::errors::SponsorResult;
use ts_rs::TS;

use crate::evidence::cap_reason;
use crate::screener::Screening;

pub const RESTRICTED_HEADLINE: &str = "No Visa Sponsorship";
pub const FRIENDLY_HEADLINE: &str = "Visa Friendly";
pub const RESTRICTED_PREAMBLE: &str =
    "This position may require US citizenship or restrict visa holders.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    pub restricted: bool,
    pub headline: String,
    pub title: String,
    pub company: String,
    pub detail: String,
    /// How long the host should keep the notice visible.
    pub display_secs: u32,
}

impl Notice {
    pub fn from_screening(screening: &Screening, config: &NoticeConfig) -> Self {
        let verdict = &screening.verdict;
        let reason = cap_reason(&verdict.reason, config.reason_display_limit);
        let (headline, detail, display_secs) = if verdict.is_restricted {
            (
                RESTRICTED_HEADLINE,
                format!("{RESTRICTED_PREAMBLE} Found: {reason}"),
                config.restricted_display_secs,
            )
        } else {
            (FRIENDLY_HEADLINE, reason, config.friendly_display_secs)
        };
        Self {
            restricted: verdict.is_restricted,
            headline: headline.to_string(),
            title: screening.title.clone(),
            company: screening.company.clone(),
            detail,
            display_secs,
        }
    }

    pub fn to_json(&self) -> SponsorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
