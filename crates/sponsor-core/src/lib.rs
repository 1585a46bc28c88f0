//! # sponsor-core
//!
//! Foundation crate for sponsorship screening.
//! Defines the normalized text type, the verdict model, the classifier
//! trait, errors, config, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SponsorConfig;
pub use errors::{SponsorError, SponsorResult};
pub use models::{JobPosting, RestrictionCategory, Verdict};
pub use normalize::{normalize, NormalizedText};
pub use traits::IClassifier;
