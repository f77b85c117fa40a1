// crates/ports/src/analytics.rs
use student_analytics_domain::{AnalyticsReport, Student};

/// Query surface every engine implements.
///
/// Implementations must agree with each other for any roster and any ordering
/// of it; they differ only in how the work is scheduled.
pub trait StudentAnalytics: Send + Sync {
    /// Short label used in logs and divergence errors.
    fn name(&self) -> &'static str;

    /// Mean age of enrolled students, `0.0` when nobody is enrolled.
    fn average_age_of_enrolled(&self, students: &[Student]) -> f64;

    /// Most frequent first name among inactive students. Ties resolve to the
    /// lexicographically smallest name; `None` when no student is inactive.
    fn most_common_first_name_of_inactive(&self, students: &[Student]) -> Option<String>;

    /// Inactive students older than 20 with a failing grade.
    fn count_failed_older_than_20(&self, students: &[Student]) -> usize;

    fn report(&self, students: &[Student]) -> AnalyticsReport {
        AnalyticsReport {
            average_age_of_enrolled: self.average_age_of_enrolled(students),
            most_common_first_name_of_inactive: self.most_common_first_name_of_inactive(students),
            failed_older_than_20: self.count_failed_older_than_20(students),
        }
    }
}
