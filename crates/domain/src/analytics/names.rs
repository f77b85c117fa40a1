// crates/domain/src/analytics/names.rs
use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};
use student_analytics_shared_kernel::FirstName;

/// A first name together with the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFrequency {
    pub name: String,
    pub count: usize,
}

impl NameFrequency {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self { name: name.into(), count }
    }

    /// Ranking used to pick the most common name: higher count first, then the
    /// lexicographically smallest name. `Greater` means `self` wins.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count).then_with(|| other.name.cmp(&self.name))
    }

    #[inline]
    pub fn outranks(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Greater
    }

    /// Keeps the higher-ranked of two candidates. Associative and commutative,
    /// so it can serve as a parallel reducer.
    pub fn pick(self, other: Self) -> Self {
        if other.outranks(&self) { other } else { self }
    }
}

/// Per-name occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTally {
    counts: HashMap<String, usize>,
}

impl NameTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &FirstName) {
        if let Some(count) = self.counts.get_mut(name.as_str()) {
            *count += 1;
        } else {
            self.counts.insert(name.as_str().to_owned(), 1);
        }
    }

    /// Folding form of [`NameTally::record`].
    pub fn with(mut self, name: &FirstName) -> Self {
        self.record(name);
        self
    }

    /// Adds the counts of `other` into `self`, draining the smaller map into the larger.
    pub fn merge(mut self, mut other: Self) -> Self {
        if self.counts.len() < other.counts.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (name, count) in other.counts {
            *self.counts.entry(name).or_insert(0) += count;
        }
        self
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    pub fn into_inner(self) -> HashMap<String, usize> {
        self.counts
    }

    /// The most frequent name, ties going to the lexicographically smallest.
    /// `None` when nothing was recorded.
    pub fn most_common(&self) -> Option<NameFrequency> {
        self.iter()
            .map(|(name, count)| NameFrequency::new(name, count))
            .reduce(NameFrequency::pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(names: &[&str]) -> NameTally {
        names.iter().fold(NameTally::new(), |t, n| t.with(&FirstName::new(*n)))
    }

    #[test]
    fn counts_repeated_names() {
        let t = tally(&["Ann", "Bob", "Ann"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.count("Ann"), 2);
        assert_eq!(t.count("Bob"), 1);
        assert_eq!(t.count("Cid"), 0);
    }

    #[test]
    fn merge_adds_counts_for_shared_keys() {
        let merged = tally(&["Ann", "Bob"]).merge(tally(&["Ann", "Cid", "Cid", "Dee"]));
        assert_eq!(merged.count("Ann"), 2);
        assert_eq!(merged.count("Bob"), 1);
        assert_eq!(merged.count("Cid"), 2);
        assert_eq!(merged.count("Dee"), 1);
        assert_eq!(merged, tally(&["Ann", "Cid", "Cid", "Dee"]).merge(tally(&["Ann", "Bob"])));
    }

    #[test]
    fn most_common_prefers_higher_count() {
        let top = tally(&["Zed", "Zed", "Ann"]).most_common().unwrap();
        assert_eq!(top, NameFrequency::new("Zed", 2));
    }

    #[test]
    fn ties_go_to_smallest_name() {
        let top = tally(&["Cid", "Bob", "Ann", "Bob", "Ann", "Cid"]).most_common().unwrap();
        assert_eq!(top, NameFrequency::new("Ann", 2));
    }

    #[test]
    fn tie_break_is_case_sensitive_bytewise() {
        let top = tally(&["ann", "Bob"]).most_common().unwrap();
        assert_eq!(top.name, "Bob");
    }

    #[test]
    fn empty_tally_has_no_mode() {
        assert!(NameTally::new().most_common().is_none());
    }

    #[test]
    fn pick_is_commutative() {
        let a = NameFrequency::new("Ann", 3);
        let b = NameFrequency::new("Bob", 3);
        assert_eq!(a.clone().pick(b.clone()), b.pick(a));
    }
}
