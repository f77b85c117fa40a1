// crates/domain/src/analytics/age.rs
use serde::{Deserialize, Serialize};
use student_analytics_shared_kernel::{Age, StudentCount};

/// Partial sum of ages.
///
/// Ages are summed as integers so that merging partitions in any order yields
/// exactly the same total; the only floating-point step is the final division
/// in [`AgeAccumulator::average`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeAccumulator {
    total: u64,
    count: StudentCount,
}

impl AgeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, age: Age) {
        self.total += u64::from(age.value());
        self.count.increment();
    }

    /// Folding form of [`AgeAccumulator::record`].
    #[inline]
    pub fn with(mut self, age: Age) -> Self {
        self.record(age);
        self
    }

    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            count: self.count + other.count,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self) -> StudentCount {
        self.count
    }

    /// Arithmetic mean of the recorded ages, or `0.0` when nothing was recorded.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count.is_zero() {
            return 0.0;
        }
        self.total as f64 / self.count.value() as f64
    }
}
