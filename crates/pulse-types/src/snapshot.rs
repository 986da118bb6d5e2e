//! Snapshot record types: what an agent reports and what the store holds.
//!
//! A [`SnapshotRecord`] is one ingested unit of agent state plus its
//! decision context (goal, reply, perception, plan). Records are immutable
//! once appended -- the sink never edits, re-validates, or interprets them
//! beyond structural decoding at the HTTP boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SnapshotId;

/// The mood/traits sub-structure of a snapshot record.
///
/// `mood` is an unconstrained scalar; the sink imposes no range. Trait
/// names are unique by construction of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Current mood scalar as reported by the agent.
    pub mood: f64,
    /// Named personality traits and their current values.
    pub traits: BTreeMap<String, f64>,
}

/// One ingested unit of agent state.
///
/// `perception` and `plan` are opaque structured values: the sink stores
/// and returns them verbatim but never inspects them. What shape they
/// take is a contract between the agent and whoever reads the telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Name of the reporting agent.
    pub agent_name: String,
    /// The agent's self-description of why it exists.
    pub identity_reason: String,
    /// The user input that triggered this decision cycle.
    pub user_input: String,
    /// Opaque perception payload (stored verbatim, never inspected).
    pub perception: serde_json::Value,
    /// The goal the agent chose. Used as the aggregation key for the
    /// goal histogram; empty or whitespace goals are ordinary keys.
    pub goal: String,
    /// Opaque plan payload (stored verbatim, never inspected).
    pub plan: serde_json::Value,
    /// The reply the agent produced.
    pub reply: String,
    /// The agent's internal state at the time of the snapshot.
    pub state_snapshot: StateSnapshot,
}

/// The envelope the event store holds: the record plus ingest metadata.
///
/// `id` and `received_at` are assigned by the sink at append time and
/// never participate in aggregation -- the summary remains a fold over
/// the records alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSnapshot {
    /// Server-assigned identifier (UUID v7, time-ordered).
    pub id: SnapshotId,
    /// When the sink accepted the record.
    pub received_at: DateTime<Utc>,
    /// The record exactly as decoded at the boundary.
    pub record: SnapshotRecord,
}

impl StoredSnapshot {
    /// Wrap a freshly decoded record in a stored envelope, stamping it
    /// with a new ID and the current time.
    pub fn accept(record: SnapshotRecord) -> Self {
        Self {
            id: SnapshotId::new(),
            received_at: Utc::now(),
            record,
        }
    }
}

/// Lightweight projection pushed to `WebSocket` subscribers on each ingest.
///
/// Carries just enough to drive a live dashboard without re-sending the
/// opaque perception/plan payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotBroadcast {
    /// Identifier of the stored snapshot.
    pub id: SnapshotId,
    /// Name of the reporting agent.
    pub agent_name: String,
    /// The goal the agent chose.
    pub goal: String,
    /// The reported mood scalar.
    pub mood: f64,
    /// When the sink accepted the record.
    pub received_at: DateTime<Utc>,
}

impl From<&StoredSnapshot> for SnapshotBroadcast {
    fn from(stored: &StoredSnapshot) -> Self {
        Self {
            id: stored.id,
            agent_name: stored.record.agent_name.clone(),
            goal: stored.record.goal.clone(),
            mood: stored.record.state_snapshot.mood,
            received_at: stored.received_at,
        }
    }
}
