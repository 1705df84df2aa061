//! Selection ledger: how many times each course code has been placed in the plan

use crate::core::models::normalize_code;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiset of selected course codes, keyed by normalized code.
///
/// A code with count 0 is never stored, so a missing key and a zero count are
/// the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLedger {
    counts: BTreeMap<String, u32>,
}

impl SelectionLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a list of codes, counting repeats
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ledger = Self::new();
        for code in codes {
            ledger.select(code.as_ref());
        }
        ledger
    }

    /// Record one more selection of `code`. Blank codes are ignored.
    pub fn select(&mut self, code: &str) {
        let key = normalize_code(code);
        if key.is_empty() {
            return;
        }
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Remove one selection of `code`, dropping the key when it reaches zero.
    ///
    /// # Returns
    /// `true` if a selection was removed
    pub fn deselect(&mut self, code: &str) -> bool {
        let key = normalize_code(code);
        match self.counts.get_mut(&key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Replace the code held by one planner slot: the previous code (if any)
    /// loses a selection and the next code (if any) gains one.
    pub fn replace(&mut self, previous: Option<&str>, next: Option<&str>) {
        if let Some(prev) = previous {
            self.deselect(prev);
        }
        if let Some(next) = next {
            self.select(next);
        }
    }

    /// Number of selections of `code` (0 when absent)
    #[must_use]
    pub fn count(&self, code: &str) -> u32 {
        self.counts
            .get(&normalize_code(code))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `code` has been selected at least once
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.count(code) > 0
    }

    /// Number of distinct codes selected
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(normalized code, count)` pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(code, count)| (code.as_str(), *count))
    }

    /// Remove every selection
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
