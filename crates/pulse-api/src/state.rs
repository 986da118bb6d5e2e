//! Shared application state for the Pulse API server.
//!
//! [`AppState`] holds the event store handle and the broadcast channel
//! that fans accepted snapshots out to `WebSocket` subscribers. The
//! store is constructed once by the process root and shared here by
//! handle; the API never owns a second copy of the sequence.

use pulse_core::EventStore;
use pulse_types::SnapshotBroadcast;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel for snapshot frames.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest frame.
const BROADCAST_CAPACITY: usize = 256;

/// Shared state for the Axum application.
///
/// Cloned into handlers via Axum's `State` extractor. Cloning is cheap:
/// the store clones its internal handle and the sender clones the
/// channel half.
#[derive(Clone)]
pub struct AppState {
    /// The append-only event store.
    pub store: EventStore,
    /// Broadcast sender for accepted-snapshot frames.
    pub tx: broadcast::Sender<SnapshotBroadcast>,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(store: EventStore) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { store, tx }
    }

    /// Subscribe to the snapshot broadcast channel.
    ///
    /// Returns a receiver that yields one [`SnapshotBroadcast`] per
    /// accepted ingest from the moment of subscription onward.
    pub fn subscribe(&self) -> broadcast::Receiver<SnapshotBroadcast> {
        self.tx.subscribe()
    }

    /// Publish an accepted snapshot to all connected subscribers.
    ///
    /// Returns the number of receivers that got the frame. Returns 0
    /// when no clients are connected, which is normal and not an error.
    pub fn broadcast(&self, frame: &SnapshotBroadcast) -> usize {
        // send errs only when there are zero receivers.
        self.tx.send(frame.clone()).unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EventStore::new())
    }
}
