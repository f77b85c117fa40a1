// crates/shared-kernel/tests/counts_eq.rs
use student_analytics_shared_kernel::StudentCount;

#[test]
fn eq_with_usize_both_sides() {
    let count = StudentCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}
