pub mod age;
pub mod names;
pub mod predicates;
pub mod report;

pub use age::AgeAccumulator;
pub use names::{NameFrequency, NameTally};
pub use predicates::{
    FAILED_AGE_THRESHOLD, FAILING_GRADE_THRESHOLD, has_failed_older_than_20, is_enrolled, is_inactive,
};
pub use report::AnalyticsReport;
