//! Error handling for sponsorship screening.
//! `thiserror` only. Classification itself is total and never errors;
//! only configuration loading and serialization can fail.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SponsorError {
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type SponsorResult<T> = Result<T, SponsorError>;
