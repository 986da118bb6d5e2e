//! Error types for the Pulse API layer.
//!
//! [`ApiError`] unifies all boundary failure modes into a single enum
//! that converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! core has no failure surface of its own: every error here is a
//! boundary rejection, surfaced before shared state is touched.
//! Malformed ingest bodies never reach this type -- the `Json`
//! extractor rejects them on its own.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested snapshot was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A snapshot ID could not be parsed from the request path.
    #[error("invalid snapshot id: {0}")]
    InvalidId(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidId(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(String::from("snapshot abc")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let response = ApiError::InvalidId(String::from("not-a-uuid")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
