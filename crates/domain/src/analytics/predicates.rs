// crates/domain/src/analytics/predicates.rs
//! Filter predicates shared by every engine.

use crate::model::Student;

/// Grades strictly below this score are failing.
pub const FAILING_GRADE_THRESHOLD: i32 = 65;

/// Failed-student counts only include students strictly older than this.
pub const FAILED_AGE_THRESHOLD: u32 = 20;

#[inline]
pub fn is_enrolled(student: &Student) -> bool {
    student.is_current()
}

#[inline]
pub fn is_inactive(student: &Student) -> bool {
    !student.is_current()
}

/// A student has failed only once they are no longer enrolled.
#[inline]
pub fn has_failed_older_than_20(student: &Student) -> bool {
    is_inactive(student)
        && student.age().is_older_than(FAILED_AGE_THRESHOLD)
        && student.grade().is_below(FAILING_GRADE_THRESHOLD)
}
