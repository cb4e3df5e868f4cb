//! Cross-referencing the catalog against completed identifiers.

use crate::filewalker::Catalog;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Completion counts for the whole catalog or a single topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub done: usize,
    pub total: usize,
    pub pct: u32,
}

impl Stats {
    pub fn new(done: usize, total: usize) -> Self {
        Self {
            done,
            total,
            pct: percent(done, total),
        }
    }
}

/// The JSON document printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub summary: Stats,
    pub topics: BTreeMap<String, Stats>,
}

/// `n` as a whole percentage of `d`, rounding halves to even. Zero when `d` is zero.
pub fn percent(n: usize, d: usize) -> u32 {
    if d == 0 {
        return 0;
    }
    let scaled = n as u128 * 100;
    let d = d as u128;
    let (q, r) = (scaled / d, scaled % d);
    let rounded = match (2 * r).cmp(&d) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q % 2 == 1 => q + 1,
        _ => q,
    };
    rounded as u32
}

/// Computes overall and per-topic stats.
///
/// Topic sets are disjoint (one file, one parent directory), so summing the
/// per-topic intersections equals intersecting the whole catalog once.
pub fn aggregate(catalog: &Catalog, completed: &HashSet<String>) -> ProgressReport {
    let topics: BTreeMap<String, Stats> = catalog
        .iter()
        .map(|(topic, slugs)| {
            let done = slugs.iter().filter(|s| completed.contains(*s)).count();
            (topic.clone(), Stats::new(done, slugs.len()))
        })
        .collect();

    let done = topics.values().map(|s| s.done).sum();
    let total = topics.values().map(|s| s.total).sum();

    ProgressReport {
        summary: Stats::new(done, total),
        topics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn catalog(entries: &[(&str, Vec<&str>)]) -> Catalog {
        entries
            .iter()
            .map(|(topic, slugs)| {
                (
                    topic.to_string(),
                    slugs.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
                )
            })
            .collect()
    }

    fn completed(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_percent_zero_total() {
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 7), 0);
    }

    #[test]
    fn test_percent_ties_round_to_even() {
        // 12.5 -> 12, 37.5 -> 38, 62.5 -> 62, 87.5 -> 88
        assert_eq!(percent(1, 8), 12);
        assert_eq!(percent(3, 8), 38);
        assert_eq!(percent(5, 8), 62);
        assert_eq!(percent(7, 8), 88);
    }

    #[test]
    fn test_percent_bounds() {
        for d in 1..=50 {
            for n in 0..=d {
                let p = percent(n, d);
                assert!(p <= 100, "percent({n}, {d}) = {p}");
            }
        }
    }

    #[test]
    fn test_aggregate_scenario() {
        let catalog = catalog(&[
            ("variables", vec!["variables1", "variables2"]),
            ("move_semantics", vec!["move_semantics2"]),
        ]);
        let report = aggregate(&catalog, &completed(&["variables1", "move_semantics2"]));

        assert_eq!(report.summary, Stats { done: 2, total: 3, pct: 67 });
        assert_eq!(report.topics["variables"], Stats { done: 1, total: 2, pct: 50 });
        assert_eq!(report.topics["move_semantics"], Stats { done: 1, total: 1, pct: 100 });
    }

    #[test]
    fn test_completed_entries_outside_catalog_are_ignored() {
        let catalog = catalog(&[("if", vec!["if1", "if2"])]);
        let report = aggregate(&catalog, &completed(&["if1", "ghost", "other9"]));

        assert_eq!(report.summary.done, 1);
        assert!(report.summary.done <= report.summary.total);
    }

    #[test]
    fn test_nothing_completed() {
        let catalog = catalog(&[("a", vec!["a1", "a2", "a3"]), ("b", vec!["b1", "b2"])]);
        let report = aggregate(&catalog, &HashSet::new());

        assert_eq!(report.summary, Stats { done: 0, total: 5, pct: 0 });
        assert!(report.topics.values().all(|s| s.pct == 0));
    }

    #[test]
    fn test_empty_catalog() {
        let report = aggregate(&Catalog::new(), &completed(&["x"]));
        assert_eq!(report.summary, Stats { done: 0, total: 0, pct: 0 });
        assert!(report.topics.is_empty());
    }

    #[test]
    fn test_serializes_to_expected_shape() {
        let catalog = catalog(&[("traits", vec!["traits1"])]);
        let report = aggregate(&catalog, &completed(&["traits1"]));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "summary": {"done": 1, "total": 1, "pct": 100},
                "topics": {"traits": {"done": 1, "total": 1, "pct": 100}}
            })
        );
    }
}
