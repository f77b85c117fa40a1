//! Shared test utilities.

pub mod builders;
pub mod roster;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use roster::*;
