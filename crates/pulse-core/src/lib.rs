//! Append-only event store and summary aggregation for the Pulse
//! telemetry sink.
//!
//! This crate is the design core of the sink. Everything else (HTTP
//! routing, JSON framing, process startup) is plumbing around two pieces:
//!
//! - [`EventStore`] -- the process-wide, append-only, in-memory sequence
//!   of stored snapshots. Records are never mutated, reordered, or
//!   deleted; the only lifecycle event is creation.
//! - [`summarize`] -- a pure fold producing a [`TelemetrySummary`]
//!   (count, average mood, goal histogram) from a sequence of records.
//!
//! # Consistency
//!
//! Appends take an exclusive write lock; the store's summary path runs
//! the entire fold under the read lock, so every summary reflects one
//! consistent instant of the sequence -- no record is ever excluded,
//! double-counted, or observed half-appended.
//!
//! [`TelemetrySummary`]: pulse_types::TelemetrySummary

pub mod aggregate;
pub mod store;

pub use aggregate::summarize;
pub use store::EventStore;
