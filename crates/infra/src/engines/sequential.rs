// crates/infra/src/engines/sequential.rs
//! Loop-based engine. Every query is a single pass over the roster.

use log::trace;
use student_analytics_domain::{
    AgeAccumulator, NameFrequency, NameTally, Student,
    analytics::{has_failed_older_than_20, is_enrolled, is_inactive},
};
use student_analytics_ports::StudentAnalytics;
use student_analytics_shared_kernel::StudentCount;

#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAnalytics;

impl SequentialAnalytics {
    pub fn new() -> Self {
        Self
    }
}

impl StudentAnalytics for SequentialAnalytics {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn average_age_of_enrolled(&self, students: &[Student]) -> f64 {
        trace!("{}: average_age_of_enrolled over {} students", self.name(), students.len());

        let mut ages = AgeAccumulator::new();
        for student in students {
            if is_enrolled(student) {
                ages.record(student.age());
            }
        }
        ages.average()
    }

    fn most_common_first_name_of_inactive(&self, students: &[Student]) -> Option<String> {
        trace!("{}: most_common_first_name_of_inactive over {} students", self.name(), students.len());

        let mut tally = NameTally::new();
        for student in students {
            if is_inactive(student) {
                tally.record(student.first_name());
            }
        }

        let mut best: Option<NameFrequency> = None;
        for (name, count) in tally.iter() {
            let candidate = NameFrequency::new(name, count);
            if best.as_ref().is_none_or(|current| candidate.outranks(current)) {
                best = Some(candidate);
            }
        }
        best.map(|winner| winner.name)
    }

    fn count_failed_older_than_20(&self, students: &[Student]) -> usize {
        trace!("{}: count_failed_older_than_20 over {} students", self.name(), students.len());

        let mut failed = StudentCount::zero();
        for student in students {
            if has_failed_older_than_20(student) {
                failed.increment();
            }
        }
        failed.value()
    }
}
