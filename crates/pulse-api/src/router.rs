//! Axum router construction for the Pulse API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the Pulse server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/snapshots` -- ingest a snapshot record
/// - `GET /api/snapshots` -- list stored snapshots
/// - `GET /api/snapshots/:id` -- single snapshot
/// - `GET /api/summary` -- aggregate summary
/// - `GET /ws/snapshots` -- `WebSocket` accepted-snapshot stream
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/snapshots", get(ws::ws_snapshots))
        // REST API
        .route(
            "/api/snapshots",
            post(handlers::ingest_snapshot).get(handlers::list_snapshots),
        )
        .route("/api/snapshots/{id}", get(handlers::get_snapshot))
        .route("/api/summary", get(handlers::get_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
