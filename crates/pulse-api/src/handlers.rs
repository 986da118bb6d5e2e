//! REST endpoint handlers for the Pulse API server.
//!
//! Handlers are thin: the Axum `Json` extractor performs structural
//! decoding at the boundary, and everything after that is a call into
//! the [`pulse_core::EventStore`]. A malformed body is rejected by the
//! extractor with a client error before any handler body runs, so a
//! failed ingest can never partially append.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/snapshots` | Ingest one snapshot record |
//! | `GET` | `/api/snapshots` | List stored snapshots |
//! | `GET` | `/api/snapshots/:id` | Get a single stored snapshot |
//! | `GET` | `/api/summary` | Aggregate summary |

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use pulse_types::{SnapshotBroadcast, SnapshotId, SnapshotRecord};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/snapshots` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct SnapshotsQuery {
    /// Filter by reporting agent name (exact match).
    pub agent: Option<String>,
    /// Filter by goal text (exact match).
    pub goal: Option<String>,
    /// Maximum number of snapshots to return (default 100, max 1000).
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing sink status and API links.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state.store.summarize().await;
    let count = summary.count;
    let average_mood = summary.average_mood;
    let goal_count = summary.goal_counts.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Pulse Telemetry Sink</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Pulse</h1>
    <p class="subtitle">Agent state telemetry sink</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Snapshots</div>
            <div class="value">{count}</div>
        </div>
        <div class="metric">
            <div class="label">Average mood</div>
            <div class="value">{average_mood:.2}</div>
        </div>
        <div class="metric">
            <div class="label">Distinct goals</div>
            <div class="value">{goal_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>POST <a href="/api/snapshots">/api/snapshots</a> -- Ingest a snapshot record</li>
        <li>GET <a href="/api/snapshots">/api/snapshots</a> -- List snapshots (?agent=X&amp;goal=Y&amp;limit=N)</li>
        <li>GET /api/snapshots/:id -- Single snapshot detail</li>
        <li>GET <a href="/api/summary">/api/summary</a> -- Aggregate summary</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li><code>ws://host:port/ws/snapshots</code> -- Live accepted-snapshot stream</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// POST /api/snapshots -- ingest one snapshot record
// ---------------------------------------------------------------------------

/// Accept one decoded snapshot record, append it to the event store, and
/// broadcast a lightweight frame to `WebSocket` subscribers.
///
/// Responds `204 No Content` on success. Structural decode failures never
/// reach this handler: the `Json` extractor rejects them with a client
/// error first, so the store's count is untouched by bad input.
pub async fn ingest_snapshot(
    State(state): State<AppState>,
    Json(record): Json<SnapshotRecord>,
) -> StatusCode {
    let stored = state.store.append(record).await;

    info!(
        id = %stored.id,
        agent = stored.record.agent_name,
        goal = stored.record.goal,
        mood = stored.record.state_snapshot.mood,
        "snapshot accepted"
    );

    state.broadcast(&SnapshotBroadcast::from(&stored));

    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// GET /api/summary -- aggregate summary
// ---------------------------------------------------------------------------

/// Return the aggregate summary (count, average mood, goal histogram).
///
/// The fold runs inside the store under one read guard, so the numbers
/// always describe a single consistent instant of the sequence.
pub async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.summarize().await)
}

// ---------------------------------------------------------------------------
// GET /api/snapshots -- list stored snapshots
// ---------------------------------------------------------------------------

/// List stored snapshots in append order, optionally filtered.
///
/// # Query Parameters
///
/// - `agent`: only snapshots from this agent name.
/// - `goal`: only snapshots with this goal text.
/// - `limit`: keep the most recent N matches (default 100, max 1000).
pub async fn list_snapshots(
    State(state): State<AppState>,
    Query(params): Query<SnapshotsQuery>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(100).min(1000);

    let all = state.store.snapshot_all().await;
    let matches: Vec<_> = all
        .iter()
        .filter(|stored| {
            if let Some(ref agent) = params.agent
                && stored.record.agent_name != *agent
            {
                return false;
            }
            if let Some(ref goal) = params.goal
                && stored.record.goal != *goal
            {
                return false;
            }
            true
        })
        .collect();

    // Keep the tail: the most recent `limit` matches, still in append order.
    let start = matches.len().saturating_sub(limit);
    let page = matches.get(start..).unwrap_or_default();

    Json(serde_json::json!({
        "count": page.len(),
        "snapshots": page,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/snapshots/:id -- single snapshot detail
// ---------------------------------------------------------------------------

/// Return a single stored snapshot by its server-assigned ID.
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_snapshot_id(&id_str)?;

    let stored = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("snapshot {id}")))?;

    Ok(Json(stored))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a snapshot ID from a path segment, returning an [`ApiError`]
/// on failure.
fn parse_snapshot_id(s: &str) -> Result<SnapshotId, ApiError> {
    s.parse::<Uuid>()
        .map(SnapshotId::from)
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}
