//! Graceful degradation for the classifier.
//!
//! If a rule fails to compile it is skipped, a warning is logged, and
//! classification continues with the remaining rules. The tracker records
//! the gap for the caller.

/// Record of a rule that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub table: String,
}

/// Degradation tracker — accumulates failures during a classification pass.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule failure. The engine continues with remaining rules.
    pub fn record_failure(&mut self, pattern_name: &str, table: &str) {
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            table: table.to_string(),
        });
    }

    /// Whether any rules were skipped during this pass.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
