//! # sponsor-observability
//!
//! Structured logging for sponsorship screening: subscriber setup, the
//! classification span, and one event function per decision point.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
