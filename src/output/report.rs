//! Report aggregation
//!
//! Turns a finished [`VisitTable`] into groups of pages that share a
//! reference count.

use crate::state::VisitTable;
use crate::url::base_token;
use std::collections::BTreeMap;

/// Pages that were referenced the same number of times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    /// Reference count shared by every link in the group
    pub count: u64,

    /// Normalized URLs, ordered by base token then by length
    pub links: Vec<String>,
}

/// Grouped frequency report of a crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Sum of all reference counts
    pub total: u64,

    /// Groups ordered by descending count
    pub groups: Vec<ReportGroup>,
}

/// Builds the report for a finished crawl
///
/// # Ordering Rules
///
/// 1. One group per distinct count, groups by descending count
/// 2. Inside a group, links are partitioned by base token (the text before
///    the first `/`); partitions are ordered lexicographically by base token
/// 3. Inside a partition, links are ordered by ascending length; equal
///    lengths keep the order in which the pages were first visited
///
/// # Example
///
/// ```
/// use link_census::output::build_report;
/// use link_census::state::VisitTable;
///
/// let table: VisitTable = ["b.com", "a.com/x", "b.com", "a.com/x", "c.com"]
///     .into_iter()
///     .collect();
/// let report = build_report(&table);
///
/// assert_eq!(report.total, 5);
/// assert_eq!(report.groups[0].count, 2);
/// assert_eq!(report.groups[0].links, vec!["a.com/x", "b.com"]);
/// assert_eq!(report.groups[1].links, vec!["c.com"]);
/// ```
pub fn build_report(table: &VisitTable) -> Report {
    let mut buckets: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for (key, count) in table.iter() {
        buckets.entry(count).or_default().push(key);
    }

    let groups = buckets
        .into_iter()
        .rev()
        .map(|(count, links)| ReportGroup {
            count,
            links: order_links(links),
        })
        .collect();

    Report {
        total: table.total(),
        groups,
    }
}

fn order_links(links: Vec<&str>) -> Vec<String> {
    let mut partitions: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for link in links {
        partitions.entry(base_token(link)).or_default().push(link);
    }

    partitions
        .into_values()
        .flat_map(|mut partition| {
            // Stable, so equal lengths keep first-visit order
            partition.sort_by_key(|link| link.len());
            partition
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(visits: &[&str]) -> VisitTable {
        visits.iter().collect()
    }

    #[test]
    fn test_empty_table() {
        let report = build_report(&VisitTable::new());
        assert_eq!(report.total, 0);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_groups_by_count_descending() {
        let report = build_report(&table(&[
            "b.com/page",
            "a.com/other",
            "c.com",
            "b.com/page",
            "a.com/other",
        ]));

        assert_eq!(report.total, 5);
        assert_eq!(
            report.groups,
            vec![
                ReportGroup {
                    count: 2,
                    links: vec!["a.com/other".to_string(), "b.com/page".to_string()],
                },
                ReportGroup {
                    count: 1,
                    links: vec!["c.com".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_length_order_within_base() {
        let report = build_report(&table(&["x.com/aaaa", "x.com/b", "x.com"]));
        assert_eq!(report.groups[0].links, vec!["x.com", "x.com/b", "x.com/aaaa"]);
    }

    #[test]
    fn test_length_not_lexicographic() {
        let report = build_report(&table(&["x.com/a/long/path", "x.com/zz"]));
        assert_eq!(report.groups[0].links, vec!["x.com/zz", "x.com/a/long/path"]);
    }

    #[test]
    fn test_equal_lengths_keep_visit_order() {
        let report = build_report(&table(&["x.com/b", "x.com/c", "x.com/a"]));
        assert_eq!(report.groups[0].links, vec!["x.com/b", "x.com/c", "x.com/a"]);
    }

    #[test]
    fn test_bases_sorted_before_lengths() {
        let report = build_report(&table(&[
            "z.com",
            "a.com/a/very/long/path",
            "x.com:8080/a",
            "x.com/zz",
        ]));
        assert_eq!(
            report.groups[0].links,
            vec!["a.com/a/very/long/path", "x.com/zz", "x.com:8080/a", "z.com"]
        );
    }

    #[test]
    fn test_total_counts_every_visit() {
        let report = build_report(&table(&["a.com", "a.com", "a.com", "b.com"]));
        assert_eq!(report.total, 4);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[0].count, 3);
        assert_eq!(report.groups[1].count, 1);
    }
}
