// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of students that satisfied a query predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentCount(usize);

impl StudentCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds one to the count.
    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Default for StudentCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for StudentCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for StudentCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for StudentCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for StudentCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for StudentCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, count| acc + count)
    }
}

impl<'a> Sum<&'a StudentCount> for StudentCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for StudentCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<StudentCount> for usize {
    fn from(value: StudentCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for StudentCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<StudentCount> for usize {
    fn eq(&self, other: &StudentCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::StudentCount;

    impl fmt::Display for StudentCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
