//! Processing statistics tracking.
//!
//! Counts per-URL failures by category during a crawl.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-category failure counters for one crawl.
///
/// Pages are visited one at a time, so the counters are plain integers owned
/// by the run loop rather than shared atomics.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, usize>,
}

impl ProcessingStats {
    /// Creates counters with every category at zero.
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Current count for an error category.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Sum over all error categories.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
