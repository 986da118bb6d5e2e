//! The summary aggregator: a pure fold over a snapshot sequence.
//!
//! Both the mood sum and the goal histogram are associative and
//! commutative over records, so the result is invariant under any
//! permutation of append order. The fold is total: given a well-formed
//! sequence it cannot fail and has no partial states.

use std::collections::BTreeMap;

use pulse_types::{StoredSnapshot, TelemetrySummary};

/// Fold a sequence of stored snapshots into one summary record.
///
/// Single pass: counts the records, averages the reported moods (native
/// f64 division, 0.0 for an empty sequence), and counts occurrences per
/// goal text. Empty or whitespace goals are ordinary histogram keys --
/// no filtering, no special-casing.
pub fn summarize(records: &[StoredSnapshot]) -> TelemetrySummary {
    if records.is_empty() {
        return TelemetrySummary::empty();
    }

    let mut mood_sum = 0.0_f64;
    let mut goal_counts: BTreeMap<String, u64> = BTreeMap::new();

    for stored in records {
        mood_sum += stored.record.state_snapshot.mood;
        goal_counts
            .entry(stored.record.goal.clone())
            .and_modify(|n| *n = n.saturating_add(1))
            .or_insert(1);
    }

    let count = records.len() as u64;

    TelemetrySummary {
        count,
        average_mood: mood_sum / count as f64,
        goal_counts,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use pulse_types::{SnapshotRecord, StateSnapshot, StoredSnapshot};

    use super::*;

    /// Build a stored snapshot with the given mood and goal; everything
    /// else is boilerplate the aggregator must ignore.
    fn snapshot(mood: f64, goal: &str) -> StoredSnapshot {
        StoredSnapshot::accept(SnapshotRecord {
            agent_name: String::from("astra"),
            identity_reason: String::from("test fixture"),
            user_input: String::from("hello"),
            perception: serde_json::json!({"emotion": "neutral"}),
            goal: String::from(goal),
            plan: serde_json::json!({}),
            reply: String::from("hi"),
            state_snapshot: StateSnapshot {
                mood,
                traits: std::collections::BTreeMap::new(),
            },
        })
    }

    #[test]
    fn empty_sequence_yields_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_mood, 0.0);
        assert!(summary.goal_counts.is_empty());
    }

    #[test]
    fn known_fixture_aggregates_exactly() {
        let records = vec![
            snapshot(1.0, "a"),
            snapshot(2.0, "b"),
            snapshot(3.0, "a"),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_mood, 2.0);
        assert_eq!(summary.goal_counts.get("a"), Some(&2));
        assert_eq!(summary.goal_counts.get("b"), Some(&1));
        assert_eq!(summary.goal_counts.len(), 2);
    }

    #[test]
    fn order_independence() {
        let forward = vec![
            snapshot(1.0, "a"),
            snapshot(2.0, "b"),
            snapshot(3.0, "a"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let lhs = summarize(&forward);
        let rhs = summarize(&reversed);
        assert_eq!(lhs.count, rhs.count);
        assert_eq!(lhs.average_mood, rhs.average_mood);
        assert_eq!(lhs.goal_counts, rhs.goal_counts);
    }

    #[test]
    fn empty_and_whitespace_goals_are_ordinary_keys() {
        let records = vec![snapshot(0.0, ""), snapshot(0.0, "  "), snapshot(0.0, "")];

        let summary = summarize(&records);
        assert_eq!(summary.goal_counts.get(""), Some(&2));
        assert_eq!(summary.goal_counts.get("  "), Some(&1));
    }

    #[test]
    fn negative_moods_average_normally() {
        let records = vec![snapshot(-0.9, "comfort"), snapshot(0.3, "clarify")];
        let summary = summarize(&records);
        assert_eq!(summary.count, 2);
        assert!((summary.average_mood - (-0.3)).abs() < 1e-12);
    }

    #[test]
    fn fold_is_deterministic() {
        let records = vec![snapshot(0.5, "mirror"), snapshot(0.7, "mirror")];
        assert_eq!(summarize(&records), summarize(&records));
    }
}
