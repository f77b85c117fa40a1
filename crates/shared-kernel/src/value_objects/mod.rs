// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod student_info;

pub use counts::StudentCount;
pub use student_info::{Age, FirstName, Grade};
