use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why a posting was judged restrictive toward visa-sponsorship candidates.
///
/// The six pattern-group categories come from the restrictive rule table;
/// `WorkAuthorizationRestriction` is only produced by the contextual scan
/// around an "authorized to work" phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RestrictionCategory {
    #[serde(rename = "ITAR/Export Control")]
    ItarExportControl,
    #[serde(rename = "US Citizenship Required")]
    UsCitizenshipRequired,
    #[serde(rename = "Security Clearance Required")]
    SecurityClearanceRequired,
    #[serde(rename = "No Visa Sponsorship")]
    NoVisaSponsorship,
    #[serde(rename = "Student Visa Restriction")]
    StudentVisaRestriction,
    #[serde(rename = "Permanent Residency Required")]
    PermanentResidencyRequired,
    #[serde(rename = "Work Authorization Restriction")]
    WorkAuthorizationRestriction,
}

impl RestrictionCategory {
    /// Pattern groups in evaluation order.
    pub const PATTERN_GROUPS: [RestrictionCategory; 6] = [
        Self::ItarExportControl,
        Self::UsCitizenshipRequired,
        Self::SecurityClearanceRequired,
        Self::NoVisaSponsorship,
        Self::StudentVisaRestriction,
        Self::PermanentResidencyRequired,
    ];

    /// Human-readable name shown to users and used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::ItarExportControl => "ITAR/Export Control",
            Self::UsCitizenshipRequired => "US Citizenship Required",
            Self::SecurityClearanceRequired => "Security Clearance Required",
            Self::NoVisaSponsorship => "No Visa Sponsorship",
            Self::StudentVisaRestriction => "Student Visa Restriction",
            Self::PermanentResidencyRequired => "Permanent Residency Required",
            Self::WorkAuthorizationRestriction => "Work Authorization Restriction",
        }
    }
}

impl fmt::Display for RestrictionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
