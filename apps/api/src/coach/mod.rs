//! AI learning coach — proxies the tracker's logs and tasks to a language model
//! and relays the reply as `{ text }`.
//!
//! Request bodies are free-form JSON: the browser owns the records, so entries
//! are forwarded as they arrive rather than validated against `learning::models`.

use axum::body::Bytes;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::llm_client::gemini::GeminiFailure;
use crate::llm_client::LlmError;

pub mod handlers;
pub mod prompts;

/// Returned instead of calling a model when there is nothing to analyse.
pub const NO_DATA_PLACEHOLDER: &str = "Log at least one session or task first.";

/// Upper bound on records forwarded by the mentor analysis.
pub const MAX_RECORDS: usize = 40;

/// Fields of a log entry forwarded by the mentor analysis.
const LOG_FIELDS: [&str; 5] = ["date", "time", "duration", "category", "topic"];

#[derive(Debug, Default)]
pub struct LearningData {
    pub logs: Vec<Value>,
    pub tasks: Vec<Value>,
}

impl LearningData {
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty() && self.tasks.is_empty()
    }

    /// First `MAX_RECORDS` logs reduced to their scheduling fields, and the
    /// first `MAX_RECORDS` tasks unchanged. Notes are not sent.
    pub fn shortened(&self) -> (Vec<Value>, Vec<Value>) {
        let logs = self
            .logs
            .iter()
            .take(MAX_RECORDS)
            .map(|log| {
                let mut short = Map::new();
                for field in LOG_FIELDS {
                    if let Some(v) = log.get(field) {
                        short.insert(field.to_string(), v.clone());
                    }
                }
                Value::Object(short)
            })
            .collect();
        let tasks = self.tasks.iter().take(MAX_RECORDS).cloned().collect();
        (logs, tasks)
    }
}

/// Parses a request body as JSON, rejecting malformed input with 400.
pub fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::Validation("Invalid JSON body.".to_string()))
}

/// Reads `logs` / `tasks` from an already-parsed body. Non-array values count as empty.
pub fn learning_data(body: &Value) -> LearningData {
    let array = |key: &str| {
        body.get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    };
    LearningData {
        logs: array("logs"),
        tasks: array("tasks"),
    }
}

/// Maps a generative-language failure onto the response envelope.
/// Rejections carry the upstream body as `detail`; transport faults stay opaque.
pub fn gemini_failure(failure: GeminiFailure) -> AppError {
    match failure {
        GeminiFailure::Rejected { status, body } => {
            tracing::warn!("Gemini rejected the request with status {status}");
            AppError::Upstream {
                message: "Gemini API error".to_string(),
                detail: Some(body),
            }
        }
        GeminiFailure::Client(LlmError::MissingKey(var)) => AppError::MissingApiKey(var),
        GeminiFailure::Client(e) => AppError::Internal(anyhow::Error::new(e)),
    }
}
