//! # Ports
//!
//! Interface definitions between the use cases and the engines.
//!
//! - [`analytics`]: the [`StudentAnalytics`] query trait implemented by the
//!   sequential and parallel engines
//!
//! Use cases depend on this trait only, never on a concrete engine.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;

pub use analytics::StudentAnalytics;
