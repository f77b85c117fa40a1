// crates/shared-kernel/src/value_objects/student_info.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// First name of a student. Names are compared byte-wise and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for FirstName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FirstName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FirstName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for FirstName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    #[inline]
    pub const fn new(years: u32) -> Self {
        Self(years)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_older_than(self, years: u32) -> bool {
        self.0 > years
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Self::new(years)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric course score. Negative scores are representable; nothing clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(i32);

impl Grade {
    #[inline]
    pub const fn new(score: i32) -> Self {
        Self(score)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_below(self, threshold: i32) -> bool {
        self.0 < threshold
    }
}

impl From<i32> for Grade {
    fn from(score: i32) -> Self {
        Self::new(score)
    }
}

impl From<Grade> for i32 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
