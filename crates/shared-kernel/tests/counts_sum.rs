// crates/shared-kernel/tests/counts_sum.rs
use student_analytics_shared_kernel::StudentCount;

#[test]
fn studentcount_sum() {
    let total = [1usize, 2, 3].into_iter().map(StudentCount::from).sum::<StudentCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn studentcount_sum_ref() {
    let values = [StudentCount::from(5), StudentCount::from(7)];
    let total: StudentCount = values.iter().sum();
    assert_eq!(usize::from(total), 12);
}

#[test]
fn studentcount_add_assign() {
    let mut count = StudentCount::from(10);
    count += StudentCount::from(5);
    assert_eq!(usize::from(count), 15);
    count += 5usize;
    assert_eq!(count, 20usize);
}

#[test]
fn studentcount_increment_from_zero() {
    let mut count = StudentCount::default();
    assert!(count.is_zero());
    count.increment();
    count.increment();
    assert_eq!(count + 1usize, 3usize);
}
