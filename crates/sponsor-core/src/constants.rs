/// Sponsor-screen version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Matched text at or under this many characters is quoted verbatim.
pub const EVIDENCE_VERBATIM_MAX_CHARS: usize = 50;

/// Characters kept when a long match is truncated generically.
pub const EVIDENCE_TRUNCATE_CHARS: usize = 47;

/// Student-visa (CPT/OPT) matches at or under this length stay verbatim.
pub const STUDENT_EVIDENCE_MAX_CHARS: usize = 30;

/// Characters kept when a long student-visa match is truncated.
pub const STUDENT_EVIDENCE_TRUNCATE_CHARS: usize = 27;

/// Suffix appended to every truncated snippet.
pub const ELLIPSIS: &str = "...";
