//! Span definitions for classification and screening.

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($text_len:expr) => {
        tracing::debug_span!("sponsor.classify", text_len = $text_len)
    };
}

/// Create a screening span.
#[macro_export]
macro_rules! screening_span {
    ($has_description:expr) => {
        tracing::debug_span!("sponsor.screen", has_description = $has_description)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "sponsor.classify";
    pub const SCREEN: &str = "sponsor.screen";
}
