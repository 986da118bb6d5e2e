//! Shared type definitions for the Pulse telemetry sink.
//!
//! This crate is the single source of truth for all types crossing the
//! Pulse workspace: the snapshot record an agent reports, the envelope
//! the event store holds, the aggregate summary, and the lightweight
//! broadcast payload streamed to `WebSocket` subscribers.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for stored snapshot identifiers
//! - [`snapshot`] -- Snapshot record, state snapshot, stored envelope
//! - [`summary`] -- The aggregate summary record

pub mod ids;
pub mod snapshot;
pub mod summary;

// Re-export all public types at crate root for convenience.
pub use ids::SnapshotId;
pub use snapshot::{SnapshotBroadcast, SnapshotRecord, StateSnapshot, StoredSnapshot};
pub use summary::TelemetrySummary;
