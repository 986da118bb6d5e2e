//! HTTP + `WebSocket` API for the Pulse telemetry sink.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **Ingest endpoint** (`POST /api/snapshots`) accepting one snapshot
//!   record per request; structural decode failures are rejected at the
//!   boundary before the event store is touched
//! - **Summary endpoint** (`GET /api/summary`) serving the aggregate
//!   view (count, average mood, goal histogram)
//! - **Listing endpoints** (`GET /api/snapshots`, `GET /api/snapshots/{id}`)
//!   for browsing stored snapshots
//! - **`WebSocket` endpoint** (`/ws/snapshots`) streaming a lightweight
//!   broadcast frame for every accepted snapshot
//! - **Minimal HTML status page** (`GET /`) showing current counts and
//!   links to the API endpoints
//!
//! # Architecture
//!
//! Handlers are thin plumbing around the [`pulse_core::EventStore`]: the
//! boundary decodes, the core appends and folds. All state is volatile
//! and lost on restart; there is no persistence layer.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
