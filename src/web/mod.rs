// Web server: Axum JSON binding of the compare operation.
//
// POST /api/analyze takes {"text1": ..., "text2": ...} and returns the
// ComparisonResult as JSON. GET /health is a liveness probe. Every request
// gets its own term space, sentiment results and diff; the only shared state
// is the read-only analyzer.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::pipeline::DocumentAnalyzer;

pub mod handlers;

/// Room for JSON framing on top of the two escaped documents.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Longest JSON escape of one input byte (`\u0001` is six bytes).
const JSON_ESCAPE_FACTOR: usize = 6;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: DocumentAnalyzer,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    analyzer: DocumentAnalyzer,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        analyzer,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("docanalyzer listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = body_limit(state.config.max_input_bytes);

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(handlers::analyze::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Largest request body that can carry two documents at the input limit,
/// even when every byte of both is written as a JSON escape.
pub fn body_limit(max_input_bytes: usize) -> usize {
    max_input_bytes
        .saturating_mul(2 * JSON_ESCAPE_FACTOR)
        .saturating_add(BODY_OVERHEAD_BYTES)
}

/// Health check, always 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
