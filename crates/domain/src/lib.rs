//! # Domain
//!
//! Student records and the pieces every engine shares:
//!
//! - [`model`]: the immutable [`Student`] entity and its builder
//! - [`analytics`]: filter predicates, mergeable accumulators and the report type
//! - [`config`]: execution resources for parallel engines

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use analytics::{AgeAccumulator, AnalyticsReport, NameFrequency, NameTally};
pub use config::AnalyticsConfig;
pub use model::{Student, StudentBuilder};
