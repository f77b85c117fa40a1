//! Aggregate statistics over in-memory student rosters, computed both with
//! explicit loops and with a rayon fork/join pipeline.
//!
//! ```
//! use student_analytics::{AnalyticsConfig, ParallelAnalytics, SequentialAnalytics, Student, StudentAnalytics};
//!
//! let students = vec![
//!     Student::new("Ann", 22, 60, false),
//!     Student::new("Bob", 25, 70, true),
//!     Student::new("Ann", 23, 50, false),
//! ];
//!
//! let parallel = ParallelAnalytics::new(&AnalyticsConfig::default())?;
//! assert_eq!(parallel.average_age_of_enrolled(&students), 25.0);
//! assert_eq!(parallel.most_common_first_name_of_inactive(&students).as_deref(), Some("Ann"));
//! assert_eq!(SequentialAnalytics::new().count_failed_older_than_20(&students), 2);
//! # Ok::<(), student_analytics::AnalyticsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use student_analytics_domain::{
    AgeAccumulator, AnalyticsConfig, AnalyticsReport, NameFrequency, NameTally, Student, StudentBuilder,
    analytics::{FAILED_AGE_THRESHOLD, FAILING_GRADE_THRESHOLD},
};
pub use student_analytics_infra::{ParallelAnalytics, SequentialAnalytics};
pub use student_analytics_ports::StudentAnalytics;
pub use student_analytics_shared_kernel::{
    Age, AnalyticsError, ApplicationError, DomainError, ErrorContext, FirstName, Grade, InfrastructureError,
    Result, StudentCount,
};
pub use student_analytics_usecase::{AVERAGE_TOLERANCE, CompareEngines, ComparisonOutput, EngineRun};

/// Runs the sequential engine and a parallel engine built from `config` over
/// `students` and returns both reports once they are known to agree.
///
/// # Errors
///
/// Fails when the parallel engine cannot be built or the engines diverge.
pub fn compare_engines(students: &[Student], config: &AnalyticsConfig) -> Result<ComparisonOutput> {
    let sequential = SequentialAnalytics::new();
    let parallel = ParallelAnalytics::new(config).context("building parallel engine")?;
    CompareEngines::new(&sequential, &parallel).run(students)
}
