//! Structured log events for each classification decision point.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a positive (sponsorship offered) keyword hit.
pub fn positive_keyword_found(keyword: &str) {
    tracing::debug!(
        event = "positive_keyword_found",
        keyword = %keyword,
        "positive keyword found"
    );
}

/// Log a restrictive pattern hit.
pub fn restrictive_pattern_found(pattern_name: &str, category: &str, matched: &str) {
    tracing::info!(
        event = "restrictive_pattern_found",
        pattern = %pattern_name,
        category = %category,
        matched = %matched,
        "restrictive pattern found"
    );
}

/// Log a work-authorization requirement hit.
pub fn work_authorization_found(pattern_name: &str, matched: &str) {
    tracing::debug!(
        event = "work_authorization_found",
        pattern = %pattern_name,
        matched = %matched,
        "work authorization requirement found"
    );
}

/// Log an exclusion found near a work-authorization requirement.
pub fn work_authorization_exclusion_found(pattern_name: &str, matched: &str) {
    tracing::info!(
        event = "work_authorization_exclusion_found",
        pattern = %pattern_name,
        matched = %matched,
        "exclusion found in work authorization context"
    );
}

/// Log the final verdict.
pub fn verdict_reached(is_restricted: bool, category: Option<&str>, reason: &str) {
    tracing::debug!(
        event = "verdict_reached",
        is_restricted = is_restricted,
        category = category.unwrap_or("none"),
        reason = %reason,
        "verdict reached"
    );
}

/// Log a rule that could not be compiled and is being skipped.
pub fn pattern_degraded(pattern_name: &str, table: &str) {
    tracing::warn!(
        event = "pattern_degraded",
        pattern = %pattern_name,
        table = %table,
        "pattern failed to compile, skipping"
    );
}

/// Log a posting that was not analyzed because filtering is disabled.
pub fn screening_skipped() {
    tracing::debug!(
        event = "screening_skipped",
        "citizenship filtering disabled, skipping analysis"
    );
}
