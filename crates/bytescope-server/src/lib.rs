//! HTTP byte server.
//!
//! Serves byte streams from the registered sources via a single GET
//! endpoint, plus a health check and an API index. The source registry is
//! process-wide behind a mutex, so the LCG stream is shared by every client
//! and stays continuous across requests — deliberate shared-stream
//! semantics, not per-session isolation.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use bytescope_core::registry::{DEFAULT_REQUEST_BYTES, MAX_REQUEST_BYTES, SourceRegistry};

/// Shared server state.
pub struct AppState {
    registry: Mutex<SourceRegistry>,
}

impl AppState {
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }
}

#[derive(Deserialize)]
struct RandomParams {
    /// Bytes to produce. Absent → 5000; above the cap → silently clamped.
    count: Option<usize>,
    /// Source identifier: urandom, lcg, math. Unknown ids are errors.
    source: Option<String>,
}

#[derive(Debug, Serialize)]
struct RandomResponse {
    bytes: Vec<u8>,
    count: usize,
    source: String,
    timestamp: u64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: u64,
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

async fn handle_random(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomParams>,
) -> Result<Json<RandomResponse>, (StatusCode, Json<ErrorResponse>)> {
    let count = params.count.unwrap_or(DEFAULT_REQUEST_BYTES);
    let source = params.source.unwrap_or_else(|| "urandom".to_string());

    let mut registry = state.registry.lock().await;
    // Errors surface at the request boundary as HTTP 500 and are not
    // retried server-side.
    let bytes = registry.produce(&source, count).map_err(|e| {
        error!("produce failed for source '{source}': {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.code(),
                message: e.to_string(),
            }),
        )
    })?;
    drop(registry);

    let count = bytes.len();
    Ok(Json(RandomResponse {
        bytes,
        count,
        source,
        timestamp: epoch_ms(),
    }))
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: epoch_ms(),
    })
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let registry = state.registry.lock().await;
    let source_ids = registry.source_ids();
    drop(registry);
    let available = source_ids.join(", ");

    Json(serde_json::json!({
        "name": "bytescope server",
        "version": bytescope_core::VERSION,
        "sources": source_ids,
        "endpoints": {
            "/": "This API index",
            "/api/random": {
                "method": "GET",
                "description": "Get random bytes from a source",
                "params": {
                    "count": format!("Bytes to return (default {DEFAULT_REQUEST_BYTES}, clamped to {MAX_REQUEST_BYTES})"),
                    "source": format!("Source id. Available: {available}"),
                }
            },
            "/api/health": "Health check",
        },
        "examples": {
            "lcg_frame": "/api/random?count=5000&source=lcg",
            "device_frame": "/api/random?count=256&source=urandom",
        }
    }))
}

/// Build the axum router.
pub fn build_router(registry: SourceRegistry) -> Router {
    let state = Arc::new(AppState::new(registry));

    Router::new()
        .route("/", get(handle_index))
        .route("/api/random", get(handle_random))
        .route("/api/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP byte server until the process exits.
pub async fn run_server(registry: SourceRegistry, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(registry);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app).await
}
