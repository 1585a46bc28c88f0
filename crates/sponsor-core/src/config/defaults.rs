// Single source of truth for all default values.

// --- Screening ---
pub const DEFAULT_FILTER_CITIZENSHIP: bool = false;
pub const DEFAULT_CONTEXT_WINDOW_CHARS: usize = 200;

// --- Notice ---
pub const DEFAULT_REASON_DISPLAY_LIMIT: usize = 100;
pub const DEFAULT_RESTRICTED_DISPLAY_SECS: u32 = 12;
pub const DEFAULT_FRIENDLY_DISPLAY_SECS: u32 = 8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
