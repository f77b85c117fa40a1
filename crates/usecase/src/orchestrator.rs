// crates/usecase/src/orchestrator.rs
use log::{debug, warn};
use student_analytics_domain::{AnalyticsReport, Student};
use student_analytics_ports::StudentAnalytics;
use student_analytics_shared_kernel::{ApplicationError, ApplicationResult, Result};

use crate::dto::{ComparisonOutput, EngineRun};

/// Largest absolute difference tolerated between two average ages.
pub const AVERAGE_TOLERANCE: f64 = 1e-9;

/// Runs a reference engine and a candidate engine over one roster and checks
/// that they agree on every query.
pub struct CompareEngines<'a> {
    reference: &'a dyn StudentAnalytics,
    candidate: &'a dyn StudentAnalytics,
}

impl<'a> CompareEngines<'a> {
    pub fn new(reference: &'a dyn StudentAnalytics, candidate: &'a dyn StudentAnalytics) -> Self {
        Self { reference, candidate }
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::EngineDivergence`] naming the first query on
    /// which the two engines disagree.
    pub fn run(&self, students: &[Student]) -> Result<ComparisonOutput> {
        let reference = self.reference.report(students);
        let candidate = self.candidate.report(students);

        if let Err(err) = check_agreement(&reference, &candidate) {
            warn!(
                "{} and {} diverged over {} students: {err}",
                self.reference.name(),
                self.candidate.name(),
                students.len()
            );
            return Err(err.into());
        }

        debug!(
            "{} and {} agree over {} students",
            self.reference.name(),
            self.candidate.name(),
            students.len()
        );

        Ok(ComparisonOutput {
            students: students.len(),
            reference: EngineRun { engine: self.reference.name(), report: reference },
            candidate: EngineRun { engine: self.candidate.name(), report: candidate },
        })
    }
}

fn check_agreement(left: &AnalyticsReport, right: &AnalyticsReport) -> ApplicationResult<()> {
    if (left.average_age_of_enrolled - right.average_age_of_enrolled).abs() > AVERAGE_TOLERANCE {
        return Err(divergence(
            "average_age_of_enrolled",
            left.average_age_of_enrolled,
            right.average_age_of_enrolled,
        ));
    }
    if left.most_common_first_name_of_inactive != right.most_common_first_name_of_inactive {
        return Err(divergence(
            "most_common_first_name_of_inactive",
            format!("{:?}", left.most_common_first_name_of_inactive),
            format!("{:?}", right.most_common_first_name_of_inactive),
        ));
    }
    if left.failed_older_than_20 != right.failed_older_than_20 {
        return Err(divergence(
            "count_failed_older_than_20",
            left.failed_older_than_20,
            right.failed_older_than_20,
        ));
    }
    Ok(())
}

fn divergence(query: &str, left: impl ToString, right: impl ToString) -> ApplicationError {
    ApplicationError::EngineDivergence {
        query: query.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    }
}
