//! The aggregate summary record served by the summary endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate view over every snapshot the sink has accepted.
///
/// Computed on demand as a deterministic fold over the full sequence at
/// one consistent instant; see `pulse-core` for the fold itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySummary {
    /// Number of records seen at aggregation time.
    pub count: u64,
    /// Mean of the reported mood scalars; defined as 0.0 when `count` is 0.
    pub average_mood: f64,
    /// Occurrence count per goal text. Every goal ever seen is a key,
    /// including empty or whitespace strings.
    pub goal_counts: BTreeMap<String, u64>,
}

impl TelemetrySummary {
    /// The summary of an empty store.
    pub const fn empty() -> Self {
        Self {
            count: 0,
            average_mood: 0.0,
            goal_counts: BTreeMap::new(),
        }
    }
}

impl Default for TelemetrySummary {
    fn default() -> Self {
        Self::empty()
    }
}
