//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Stored snapshots get a server-assigned UUID v7 (time-ordered) so the
//! listing endpoint returns them in ingest order even after the inner
//! sequence is cloned out of the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored snapshot in the event store.
///
/// Assigned by the sink at append time; agents never supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub Uuid);

impl SnapshotId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SnapshotId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<SnapshotId> for Uuid {
    fn from(id: SnapshotId) -> Self {
        id.0
    }
}
