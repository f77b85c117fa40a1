// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};
use student_analytics_shared_kernel::{DomainError, DomainResult};

/// Smallest slice a parallel task is handed before rayon stops splitting.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 1024;

/// Execution resources for the parallel engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub jobs: usize,
    pub min_chunk_len: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            jobs: num_cpus::get().max(1),
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len;
        self
    }

    /// # Errors
    ///
    /// Returns [`DomainError::RangeValidation`] when `jobs` or `min_chunk_len` is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.jobs == 0 {
            return Err(range_error("jobs"));
        }
        if self.min_chunk_len == 0 {
            return Err(range_error("min_chunk_len"));
        }
        Ok(())
    }
}

fn range_error(field: &str) -> DomainError {
    DomainError::RangeValidation {
        field: field.to_string(),
        min: "1".to_string(),
        max: usize::MAX.to_string(),
    }
}
