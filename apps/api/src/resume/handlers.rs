//! Axum route handlers for the resume tailor.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::prompts::fill;
use crate::resume::tailor::{
    render_summary_document, template_summary, ExportRequest, TailorRequest, EXPORT_FILENAME,
    TAILOR_MODEL, TAILOR_PROMPT, TAILOR_SYSTEM, TAILOR_TEMPERATURE,
};
use crate::state::AppState;

const EXPORT_WIDTH: usize = 90;

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub result: String,
}

/// POST /api/ai/tailor-resume
///
/// Never rejects a body: anything unparsable is treated as an empty form.
pub async fn handle_tailor(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TailorResponse>, AppError> {
    let request: TailorRequest = serde_json::from_slice(&body).unwrap_or_default();
    let title = request.title();

    let description = match request.description() {
        Some(d) if state.chat.is_configured() => d,
        _ => {
            return Ok(Json(TailorResponse {
                result: template_summary(title),
            }))
        }
    };

    info!("Tailoring resume summary for {title}");
    let prompt = fill(TAILOR_PROMPT, &[("title", title), ("description", description)]);
    let completion = state
        .chat
        .complete(TAILOR_MODEL, TAILOR_TEMPERATURE, TAILOR_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            error!("Resume tailoring failed: {e}");
            AppError::Llm(e.user_message())
        })?;

    let result = completion
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| template_summary(title));

    Ok(Json(TailorResponse { result }))
}

/// GET /api/ai/tailor-resume
pub async fn handle_tailor_usage() -> Json<Value> {
    Json(json!({
        "message": "Use POST /api/ai/tailor-resume with jobTitle + jobDescription."
    }))
}

/// POST /api/ai/tailor-resume/export
///
/// Returns the summary as a downloadable text document.
pub async fn handle_export(body: Bytes) -> Response {
    let request: ExportRequest = serde_json::from_slice(&body).unwrap_or_default();
    let document = render_summary_document(
        request.job_title.as_deref(),
        request.content.as_deref(),
        EXPORT_WIDTH,
    );

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        document,
    )
        .into_response()
}
