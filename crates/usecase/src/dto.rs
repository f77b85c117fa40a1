// crates/usecase/src/dto.rs
use serde::Serialize;
use student_analytics_domain::AnalyticsReport;

/// Result of running two engines over the same roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutput {
    pub students: usize,
    pub reference: EngineRun,
    pub candidate: EngineRun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineRun {
    pub engine: &'static str,
    pub report: AnalyticsReport,
}
