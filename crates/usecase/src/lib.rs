//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: run two engines over the same roster and verify they agree
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on the domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ComparisonOutput, EngineRun};
pub use orchestrator::{AVERAGE_TOLERANCE, CompareEngines};
