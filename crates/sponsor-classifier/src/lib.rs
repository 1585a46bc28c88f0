//! # sponsor-classifier
//!
//! Rule-based classifier that decides whether a job description restricts
//! visa-sponsorship candidates, with a quoted evidence snippet.
//! Ordered rule tables, first match wins; restriction dominates a positive
//! sponsorship keyword.

pub mod context;
pub mod degradation;
pub mod engine;
pub mod evidence;
pub mod notice;
pub mod patterns;
pub mod screener;

pub use engine::{classify, ClassifierEngine};
pub use evidence::clean_evidence;
pub use notice::Notice;
pub use screener::{Screener, Screening};
