/// tests/common/roster.rs
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use student_analytics::Student;

pub const FIRST_NAMES: [&str; 12] = [
    "Sanjay", "Yunming", "John", "Vivek", "Shams", "Max", "Ann", "Bob", "Lea", "Zoe", "Cid", "Dee",
];

/// Deterministic pseudo-random roster: the same `seed` always yields the same students.
#[allow(dead_code)]
pub fn random_roster(len: usize, seed: u64) -> Vec<Student> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Ann");
            let age = rng.random_range(15..=45);
            let grade = rng.random_range(0..=100);
            let is_current = rng.random_bool(0.5);
            Student::new(name, age, grade, is_current)
        })
        .collect()
}
