// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod engines;

pub use engines::{ParallelAnalytics, SequentialAnalytics};
