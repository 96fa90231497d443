// POST /api/analyze: compare two documents.
//
// Returns 200 with the ComparisonResult, or 400 with {"error": ...} when a
// document is missing, blank or over the size limit. Malformed JSON bodies
// get the extractor's own status with the same error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use crate::pipeline::validate_documents;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text1: Option<String>,
    pub text2: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };

    if let Err(e) = validate_documents(
        request.text1.as_deref(),
        request.text2.as_deref(),
        state.config.max_input_bytes,
    ) {
        warn!(error = %e, "Rejected analyze request");
        return api_error(StatusCode::BAD_REQUEST, &e.to_string());
    }

    // Validation passed, so both documents are present.
    let text1 = request.text1.unwrap_or_default();
    let text2 = request.text2.unwrap_or_default();

    let analyzer = state.analyzer.clone();
    match tokio::task::spawn_blocking(move || analyzer.compare(&text1, &text2)).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(error = %e, "Comparison task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "comparison failed")
        }
    }
}
