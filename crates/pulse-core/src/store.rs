//! The append-only in-memory event store.
//!
//! The store is constructed once at process start, owned by the process
//! root, and shared with the request handlers via [`Arc`]. There is no
//! module-level singleton and no reset operation: records live until
//! process exit.
//!
//! # Locking discipline
//!
//! The sequence sits behind a [`tokio::sync::RwLock`]. Appends take the
//! write lock for a single push; [`EventStore::summarize`] holds the
//! read lock for the entire fold so the summary reflects one consistent
//! instant. Lock hold times are bounded by an O(n) scan of the current
//! sequence -- nothing blocks indefinitely and nothing suspends while
//! holding a guard.
//!
//! # Scaling note
//!
//! History is unbounded; there is no eviction. At sustained ingest rates
//! memory grows linearly for the life of the process.

use std::sync::Arc;

use pulse_types::{SnapshotId, SnapshotRecord, StoredSnapshot, TelemetrySummary};
use tokio::sync::RwLock;
use tracing::debug;

use crate::aggregate;

/// Process-wide ordered sequence of stored snapshots.
///
/// Append-only: records are never mutated in place, reordered, or
/// deleted. Cheap to share (`Clone` clones the [`Arc`] handle, not the
/// sequence).
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    records: Arc<RwLock<Vec<StoredSnapshot>>>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fully decoded record to the end of the sequence.
    ///
    /// The record is stamped with a server-assigned ID and receive time,
    /// and the stored envelope is returned so the caller can echo or
    /// broadcast it. Never fails: there is no capacity limit and no
    /// rejection policy once a record has decoded.
    pub async fn append(&self, record: SnapshotRecord) -> StoredSnapshot {
        let stored = StoredSnapshot::accept(record);
        let mut records = self.records.write().await;
        records.push(stored.clone());
        debug!(id = %stored.id, total = records.len(), "snapshot appended");
        stored
    }

    /// Return the full sequence as it exists at call time, in append order.
    ///
    /// The returned vector is a copy: it is safe to iterate without
    /// further synchronization and is isolated from appends that happen
    /// after this call returns.
    pub async fn snapshot_all(&self) -> Vec<StoredSnapshot> {
        self.records.read().await.clone()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store has accepted any records yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Look up a single stored snapshot by its server-assigned ID.
    ///
    /// Linear scan; the store keeps no index.
    pub async fn get(&self, id: SnapshotId) -> Option<StoredSnapshot> {
        self.records
            .read()
            .await
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
    }

    /// Compute the summary over one consistent instant of the sequence.
    ///
    /// The entire fold (count, mood sum, goal histogram) runs while the
    /// read lock is held, so concurrent appends cannot land mid-fold.
    pub async fn summarize(&self) -> TelemetrySummary {
        let records = self.records.read().await;
        aggregate::summarize(&records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::collections::BTreeMap;

    use pulse_types::StateSnapshot;

    use super::*;

    fn record(mood: f64, goal: &str) -> SnapshotRecord {
        SnapshotRecord {
            agent_name: String::from("astra"),
            identity_reason: String::from("test fixture"),
            user_input: String::from("hello"),
            perception: serde_json::json!({"emotion": "neutral"}),
            goal: String::from(goal),
            plan: serde_json::json!({}),
            reply: String::from("hi"),
            state_snapshot: StateSnapshot {
                mood,
                traits: BTreeMap::new(),
            },
        }
    }

    #[tokio::test]
    async fn append_grows_sequence_in_order() {
        let store = EventStore::new();
        for i in 0..5_u32 {
            store.append(record(f64::from(i), "a")).await;
        }

        let all = store.snapshot_all().await;
        assert_eq!(all.len(), 5);
        for (i, stored) in all.iter().enumerate() {
            assert_eq!(stored.record.state_snapshot.mood, i as f64);
        }
    }

    #[tokio::test]
    async fn snapshot_all_is_isolated_from_later_appends() {
        let store = EventStore::new();
        store.append(record(1.0, "a")).await;

        let view = store.snapshot_all().await;
        store.append(record(2.0, "b")).await;

        assert_eq!(view.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn get_finds_stored_snapshot_by_id() {
        let store = EventStore::new();
        let stored = store.append(record(0.4, "clarify")).await;
        store.append(record(0.6, "mirror")).await;

        let found = store.get(stored.id).await;
        assert_eq!(found, Some(stored));

        let missing = store.get(SnapshotId::new()).await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn summarize_matches_known_fixture() {
        let store = EventStore::new();
        store.append(record(1.0, "a")).await;
        store.append(record(2.0, "b")).await;
        store.append(record(3.0, "a")).await;

        let summary = store.summarize().await;
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_mood, 2.0);
        assert_eq!(summary.goal_counts.get("a"), Some(&2));
        assert_eq!(summary.goal_counts.get("b"), Some(&1));
    }

    #[tokio::test]
    async fn summarize_is_idempotent_without_intervening_appends() {
        let store = EventStore::new();
        store.append(record(0.25, "comfort")).await;

        let first = store.summarize().await;
        let second = store.summarize().await;
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_lose_nothing() {
        const WRITERS: usize = 16;
        const APPENDS_PER_WRITER: usize = 25;

        let store = EventStore::new();
        let mut handles = Vec::with_capacity(WRITERS);

        for w in 0..WRITERS {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..APPENDS_PER_WRITER {
                    store.append(record(1.0, &format!("goal-{w}"))).await;
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let summary = store.summarize().await;
        assert_eq!(store.len().await, WRITERS * APPENDS_PER_WRITER);
        assert_eq!(summary.count, (WRITERS * APPENDS_PER_WRITER) as u64);
        // Every writer's goal appears exactly APPENDS_PER_WRITER times.
        for w in 0..WRITERS {
            assert_eq!(
                summary.goal_counts.get(&format!("goal-{w}")),
                Some(&(APPENDS_PER_WRITER as u64))
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_never_observe_partial_state() {
        // Interleave appends with summaries; every observed summary must
        // be internally consistent (goal counts sum to the record count).
        let store = EventStore::new();
        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..200_u32 {
                    store
                        .append(record(f64::from(i), if i % 2 == 0 { "a" } else { "b" }))
                        .await;
                }
            })
        };

        for _ in 0..50 {
            let summary = store.summarize().await;
            let histogram_total: u64 = summary.goal_counts.values().sum();
            assert_eq!(histogram_total, summary.count);
        }

        writer.await.unwrap();
    }
}
