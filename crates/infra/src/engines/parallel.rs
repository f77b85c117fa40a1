// crates/infra/src/engines/parallel.rs
//! Fork/join engine backed by a dedicated rayon pool.
//!
//! Each query folds per-task accumulators and combines them with the
//! accumulator's `merge`, which is associative and commutative, so results do
//! not depend on how rayon splits the slice or in which order tasks finish.

use log::{debug, trace};
use rayon::{ThreadPool, prelude::*};
use student_analytics_domain::{
    AgeAccumulator, AnalyticsConfig, AnalyticsReport, NameFrequency, NameTally, Student,
    analytics::{has_failed_older_than_20, is_enrolled, is_inactive},
};
use student_analytics_ports::StudentAnalytics;
use student_analytics_shared_kernel::{InfrastructureError, Result};

#[derive(Debug)]
pub struct ParallelAnalytics {
    pool: ThreadPool,
    min_chunk_len: usize,
}

impl ParallelAnalytics {
    /// Builds the engine and its worker pool.
    ///
    /// # Errors
    ///
    /// Returns a domain error when `config` is out of range, or
    /// [`InfrastructureError::ThreadPoolCreation`] when rayon cannot spawn the pool.
    pub fn new(config: &AnalyticsConfig) -> Result<Self> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .thread_name(|index| format!("student-analytics-{index}"))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation {
                details: e.to_string(),
            })?;

        debug!(
            "parallel engine ready: jobs={} min_chunk_len={}",
            pool.current_num_threads(),
            config.min_chunk_len
        );

        Ok(Self {
            pool,
            min_chunk_len: config.min_chunk_len,
        })
    }

    pub fn jobs(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn min_chunk_len(&self) -> usize {
        self.min_chunk_len
    }

    fn average_in_pool(&self, students: &[Student]) -> f64 {
        students
            .par_iter()
            .with_min_len(self.min_chunk_len)
            .filter(|student| is_enrolled(student))
            .fold(AgeAccumulator::default, |ages, student| ages.with(student.age()))
            .reduce(AgeAccumulator::default, AgeAccumulator::merge)
            .average()
    }

    fn most_common_in_pool(&self, students: &[Student]) -> Option<String> {
        let tally = students
            .par_iter()
            .with_min_len(self.min_chunk_len)
            .filter(|student| is_inactive(student))
            .fold(NameTally::default, |tally, student| tally.with(student.first_name()))
            .reduce(NameTally::default, NameTally::merge);

        tally
            .into_inner()
            .into_par_iter()
            .map(|(name, count)| NameFrequency { name, count })
            .reduce_with(NameFrequency::pick)
            .map(|winner| winner.name)
    }

    fn failed_in_pool(&self, students: &[Student]) -> usize {
        students
            .par_iter()
            .with_min_len(self.min_chunk_len)
            .filter(|student| has_failed_older_than_20(student))
            .count()
    }
}

impl StudentAnalytics for ParallelAnalytics {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn average_age_of_enrolled(&self, students: &[Student]) -> f64 {
        trace!("{}: average_age_of_enrolled over {} students", self.name(), students.len());
        self.pool.install(|| self.average_in_pool(students))
    }

    fn most_common_first_name_of_inactive(&self, students: &[Student]) -> Option<String> {
        trace!("{}: most_common_first_name_of_inactive over {} students", self.name(), students.len());
        self.pool.install(|| self.most_common_in_pool(students))
    }

    fn count_failed_older_than_20(&self, students: &[Student]) -> usize {
        trace!("{}: count_failed_older_than_20 over {} students", self.name(), students.len());
        self.pool.install(|| self.failed_in_pool(students))
    }

    /// Runs the three queries concurrently inside the pool.
    fn report(&self, students: &[Student]) -> AnalyticsReport {
        trace!("{}: report over {} students", self.name(), students.len());
        let (average, (name, failed)) = self.pool.install(|| {
            rayon::join(
                || self.average_in_pool(students),
                || rayon::join(|| self.most_common_in_pool(students), || self.failed_in_pool(students)),
            )
        });

        AnalyticsReport {
            average_age_of_enrolled: average,
            most_common_first_name_of_inactive: name,
            failed_older_than_20: failed,
        }
    }
}
