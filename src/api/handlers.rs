//! API request handlers: shared state, response envelope, error mapping

use crate::query::{PathFinder, RelationAggregator};
use crate::store::{GraphStore, StoreError};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub store: Arc<dyn GraphStore>,
    pub relations: RelationAggregator,
    pub paths: PathFinder,
}

impl ServerState {
    /// Build server state around a store handle.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            relations: RelationAggregator::new(store.clone()),
            paths: PathFinder::new(store.clone()),
            store,
        }
    }
}

/// Shared state handle passed to every handler
pub type AtlasState = Arc<ServerState>;

// ============================================================================
// Response envelope
// ============================================================================

/// Success/failure envelope wrapping every API response.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// A successful envelope around `data`.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

// ============================================================================
// Health check
// ============================================================================

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler — verifies actual connectivity to the graph store.
///
/// Returns 200 + `"ok"` when the store is reachable, 503 + `"unhealthy"`
/// otherwise.
pub async fn health(State(state): State<AtlasState>) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state.store.health_check().await.unwrap_or(false);

    let (http_status, status) = if store_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

// ============================================================================
// Error handling
// ============================================================================

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(format!("{} not found", what)),
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            StoreError::Conflict(msg) => AppError::Conflict(msg),
            StoreError::Unavailable(source) => {
                tracing::error!("graph store unavailable: {:#}", source);
                AppError::Unavailable("graph store unavailable".to_string())
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
