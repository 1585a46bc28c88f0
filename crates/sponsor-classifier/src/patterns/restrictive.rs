use std::sync::LazyLock;

use sponsor_core::models::RestrictionCategory;

use super::{Rule, RuleTable};

/// A restrictive pattern tagged with the group it belongs to.
#[derive(Debug)]
pub struct RestrictivePattern {
    pub name: &'static str,
    pub category: RestrictionCategory,
    pub pattern: &'static str,
}

impl Rule for RestrictivePattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn pattern(&self) -> &'static str {
        self.pattern
    }
}

/// Every restrictive pattern in evaluation order.
///
/// Groups run ITAR, citizenship, clearance, no-sponsorship, student visas,
/// permanent residency; within a group, listed order. Patterns are written
/// against normalized (lower-cased, single-spaced) text.
pub static RESTRICTIVE_PATTERNS: &[RestrictivePattern] = &[
    // ── ITAR / export control ─────────────────────────────────────────────
    RestrictivePattern {
        name: "itar_requirement",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"itar requirement",
    },
    RestrictivePattern {
        name: "itar_requirements",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"itar requirements",
    },
    RestrictivePattern {
        name: "subject_to_itar",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"subject to.*itar",
    },
    RestrictivePattern {
        name: "international_traffic_in_arms",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"international traffic.*arms.*regulations",
    },
    RestrictivePattern {
        name: "export_administration_regulations",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"export administration regulations",
    },
    RestrictivePattern {
        name: "subject_to_traffic_compliance",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"subject to.*compliance.*international traffic",
    },
    RestrictivePattern {
        name: "qualify_as_us_person",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"qualify as.*u\.?s\.?\s*person",
    },
    RestrictivePattern {
        name: "applicants_must_qualify_as_us_person",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"applicants must qualify as.*u\.?s\.?\s*person",
    },
    RestrictivePattern {
        name: "must_qualify_as_us_person",
        category: RestrictionCategory::ItarExportControl,
        pattern: r"must qualify as.*u\.?s\.?\s*person",
    },
    // ── US citizenship ────────────────────────────────────────────────────
    RestrictivePattern {
        name: "must_be_us_citizen",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"must be.*us\s*citizen",
    },
    RestrictivePattern {
        name: "must_be_u_s_citizen",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"must be.*u\.?s\.?\s*citizen",
    },
    RestrictivePattern {
        name: "us_citizens_only",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"us\s*citizens?\s*only",
    },
    RestrictivePattern {
        name: "u_s_citizens_only",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"u\.?s\.?\s*citizens?\s*only",
    },
    RestrictivePattern {
        name: "citizens_only",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"citizens?\s*only",
    },
    RestrictivePattern {
        name: "require_us_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"require.*us\s*citizenship",
    },
    RestrictivePattern {
        name: "require_u_s_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"require.*u\.?s\.?\s*citizenship",
    },
    RestrictivePattern {
        name: "us_citizenship_required",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"us\s*citizenship\s*required",
    },
    RestrictivePattern {
        name: "u_s_citizenship_required",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"u\.?s\.?\s*citizenship\s*required",
    },
    RestrictivePattern {
        name: "citizenship_required",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"citizenship\s*required",
    },
    RestrictivePattern {
        name: "need_us_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"need.*us\s*citizenship",
    },
    RestrictivePattern {
        name: "need_u_s_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"need.*u\.?s\.?\s*citizenship",
    },
    RestrictivePattern {
        name: "current_u_s_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"current.*u\.?s\.?\s*citizenship",
    },
    RestrictivePattern {
        name: "positions_require_current_citizenship",
        category: RestrictionCategory::UsCitizenshipRequired,
        pattern: r"some positions.*require.*current.*u\.?s\.?\s*citizenship",
    },
    // ── Security clearance ────────────────────────────────────────────────
    RestrictivePattern {
        name: "security_clearance_required",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"security clearance.*required",
    },
    RestrictivePattern {
        name: "requires_security_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"requires.*security clearance",
    },
    RestrictivePattern {
        name: "active_security_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"active.*security clearance",
    },
    RestrictivePattern {
        name: "secret_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"secret.*clearance",
    },
    RestrictivePattern {
        name: "top_secret_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"top secret.*clearance",
    },
    RestrictivePattern {
        name: "security_cleared",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"security.*cleared",
    },
    RestrictivePattern {
        name: "obtain_security_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"obtain.*security clearance",
    },
    RestrictivePattern {
        name: "eligible_for_security_clearance",
        category: RestrictionCategory::SecurityClearanceRequired,
        pattern: r"eligible.*security clearance",
    },
    // ── No sponsorship ────────────────────────────────────────────────────
    RestrictivePattern {
        name: "do_not_sponsor",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"do not sponsor",
    },
    RestrictivePattern {
        name: "does_not_sponsor",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"does not sponsor",
    },
    RestrictivePattern {
        name: "will_not_sponsor",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"will not sponsor",
    },
    RestrictivePattern {
        name: "cannot_sponsor",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"cannot sponsor",
    },
    RestrictivePattern {
        name: "unable_to_sponsor",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"unable to sponsor",
    },
    RestrictivePattern {
        name: "not_sponsoring",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"not sponsoring",
    },
    RestrictivePattern {
        name: "no_h1b_sponsorship",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"no.*h-?1b.*sponsorship",
    },
    RestrictivePattern {
        name: "no_visa_sponsorship",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"no.*visa.*sponsorship",
    },
    RestrictivePattern {
        name: "no_sponsorship",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"no.*sponsorship",
    },
    RestrictivePattern {
        name: "sponsorship_not_available",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"sponsorship.*not.*available",
    },
    RestrictivePattern {
        name: "sponsorship_will_not_be_provided",
        category: RestrictionCategory::NoVisaSponsorship,
        pattern: r"sponsorship.*will not.*provided",
    },
    // ── Student visas ─────────────────────────────────────────────────────
    RestrictivePattern {
        name: "cpt_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"cpt.*not.*eligible",
    },
    RestrictivePattern {
        name: "opt_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"opt.*not.*eligible",
    },
    RestrictivePattern {
        name: "f1_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"f-?1.*not.*eligible",
    },
    RestrictivePattern {
        name: "j1_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"j-?1.*not.*eligible",
    },
    RestrictivePattern {
        name: "students_cpt_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"students.*cpt.*not.*eligible",
    },
    RestrictivePattern {
        name: "students_opt_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"students.*opt.*not.*eligible",
    },
    RestrictivePattern {
        name: "students_f1_not_eligible",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"students.*f-?1.*not.*eligible",
    },
    RestrictivePattern {
        name: "does_not_support_student_visas",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"does not support.*students.*visa",
    },
    RestrictivePattern {
        name: "not_support_student_visas",
        category: RestrictionCategory::StudentVisaRestriction,
        pattern: r"not support.*students.*visa",
    },
    // ── Permanent residency ───────────────────────────────────────────────
    RestrictivePattern {
        name: "must_be_permanent_resident",
        category: RestrictionCategory::PermanentResidencyRequired,
        pattern: r"must be.*permanent resident",
    },
    RestrictivePattern {
        name: "permanent_resident_required",
        category: RestrictionCategory::PermanentResidencyRequired,
        pattern: r"permanent resident.*required",
    },
    RestrictivePattern {
        name: "permanent_residency_required",
        category: RestrictionCategory::PermanentResidencyRequired,
        pattern: r"permanent residency.*required",
    },
    RestrictivePattern {
        name: "need_permanent_residency",
        category: RestrictionCategory::PermanentResidencyRequired,
        pattern: r"need.*permanent residency",
    },
];

/// The compiled restrictive table.
pub static RESTRICTIVE: LazyLock<RuleTable<RestrictivePattern>> =
    LazyLock::new(|| RuleTable::compile("restrictive", RESTRICTIVE_PATTERNS));

/// All restrictive patterns in evaluation order.
pub fn all_patterns() -> &'static [RestrictivePattern] {
    RESTRICTIVE_PATTERNS
}

/// Patterns belonging to one group, in listed order.
pub fn patterns_in(
    category: RestrictionCategory,
) -> impl Iterator<Item = &'static RestrictivePattern> {
    RESTRICTIVE_PATTERNS
        .iter()
        .filter(move |p| p.category == category)
}
