//! Axum route handlers for the learning coach.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::error;

use crate::coach::gemini_failure;
use crate::coach::prompts::{
    COACH_MODEL, COACH_PROMPT, COACH_SYSTEM, GEMINI_MODEL, GEMINI_PROMPT, MENTOR_MODEL,
    MENTOR_PROMPT, MENTOR_SYSTEM, TEMPERATURE,
};
use crate::coach::{learning_data, parse_body, NO_DATA_PLACEHOLDER};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill, pretty_json};
use crate::llm_client::LlmError;
use crate::state::AppState;

const MENTOR_EMPTY_REPLY: &str = "AI could not generate a response this time.";
const GEMINI_EMPTY_REPLY: &str = "AI response was empty.";
const COACH_FAILURE: &str = "Failed to generate AI analysis. Check server logs.";

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub text: String,
}

impl AnalysisResponse {
    fn new(text: impl Into<String>) -> Json<Self> {
        Json(Self { text: text.into() })
    }
}

/// POST /api/learning/analyze
///
/// Mentor analysis over the most recent 40 logs and tasks.
pub async fn handle_mentor_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AppError> {
    let data = learning_data(&parse_body(&body)?);
    if data.is_empty() {
        return Ok(AnalysisResponse::new(NO_DATA_PLACEHOLDER));
    }

    let (logs, tasks) = data.shortened();
    let prompt = fill(
        MENTOR_PROMPT,
        &[("logs", &pretty_json(&logs)), ("tasks", &pretty_json(&tasks))],
    );

    let completion = state
        .chat
        .complete(MENTOR_MODEL, TEMPERATURE, MENTOR_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            error!("AI learning analyze error: {e}");
            match e {
                LlmError::MissingKey(var) => AppError::MissingApiKey(var),
                other => AppError::Llm(other.user_message()),
            }
        })?;

    let text = completion
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(MENTOR_EMPTY_REPLY);

    Ok(AnalysisResponse::new(text))
}

/// POST /api/ai/learning/analyze
///
/// Coach analysis over the complete logs and tasks.
pub async fn handle_coach_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AppError> {
    let data = learning_data(&parse_body(&body)?);
    if data.is_empty() {
        return Ok(AnalysisResponse::new(NO_DATA_PLACEHOLDER));
    }
    if !state.chat.is_configured() {
        return Err(AppError::MissingApiKey("OPENAI_API_KEY"));
    }

    let prompt = fill(
        COACH_PROMPT,
        &[
            ("logs", &pretty_json(&data.logs)),
            ("tasks", &pretty_json(&data.tasks)),
        ],
    );

    let completion = state
        .chat
        .complete(COACH_MODEL, TEMPERATURE, COACH_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            error!("AI learning-analyze error: {e}");
            AppError::Llm(COACH_FAILURE.to_string())
        })?;

    Ok(AnalysisResponse::new(completion.text().unwrap_or_default()))
}

/// POST /api/ai/learning/gemini
///
/// Four-section mentor report from the generative-language API.
pub async fn handle_gemini_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AppError> {
    let body = parse_body(&body)?;
    if learning_data(&body).is_empty() {
        return Ok(AnalysisResponse::new(NO_DATA_PLACEHOLDER));
    }

    let prompt = fill(GEMINI_PROMPT, &[("data", &pretty_json(&body))]);

    let reply = state
        .gemini
        .generate(GEMINI_MODEL, &prompt)
        .await
        .map_err(gemini_failure)?;

    Ok(AnalysisResponse::new(
        reply.text().unwrap_or(GEMINI_EMPTY_REPLY),
    ))
}
