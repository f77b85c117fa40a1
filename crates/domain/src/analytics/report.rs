// crates/domain/src/analytics/report.rs
use serde::{Deserialize, Serialize};

/// Results of every query for one roster, computed by a single engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub average_age_of_enrolled: f64,
    pub most_common_first_name_of_inactive: Option<String>,
    pub failed_older_than_20: usize,
}
