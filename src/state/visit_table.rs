//! Visit table: how many times each normalized page has been reached
//!
//! The table remembers the order in which pages were first seen. Iteration
//! follows that order, which keeps report tie-breaks deterministic.

use std::collections::HashMap;

/// Outcome of recording a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The page was not in the table; it now has a count of 1
    First,

    /// The page was already known; carries the updated count
    Repeat(u64),
}

/// Mapping from normalized URL to a positive reference count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl VisitTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit to `key`
    ///
    /// Inserts the key with a count of 1 on first sight, otherwise increments
    /// its count. Check and insert happen in a single call.
    pub fn record(&mut self, key: &str) -> Visit {
        if let Some(&slot) = self.index.get(key) {
            let count = &mut self.entries[slot].1;
            *count += 1;
            return Visit::Repeat(*count);
        }

        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), 1));
        Visit::First
    }

    /// Returns the count for `key`, if it has been visited
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Returns true if `key` has been visited
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct pages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count, i.e. every visit including repeats
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates `(key, count)` pairs in first-visit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for VisitTable {
    /// Builds a table by recording each item as one visit
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.record(key.as_ref());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = VisitTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_first_visit() {
        let mut table = VisitTable::new();
        assert_eq!(table.record("example.com"), Visit::First);
        assert_eq!(table.get("example.com"), Some(1));
        assert!(table.contains("example.com"));
    }

    #[test]
    fn test_repeat_visits_increment() {
        let mut table = VisitTable::new();
        table.record("example.com/a");
        assert_eq!(table.record("example.com/a"), Visit::Repeat(2));
        assert_eq!(table.record("example.com/a"), Visit::Repeat(3));
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_unknown_key() {
        let table = VisitTable::new();
        assert_eq!(table.get("missing.com"), None);
        assert!(!table.contains("missing.com"));
    }

    #[test]
    fn test_iteration_follows_first_visit_order() {
        let table: VisitTable = ["c.com", "a.com", "c.com", "b.com", "a.com"]
            .into_iter()
            .collect();

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("c.com", 2), ("a.com", 2), ("b.com", 1)]);
        assert_eq!(table.total(), 5);
    }
}
