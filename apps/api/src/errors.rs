use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as the `{ "error": ... }` envelope the frontend reads.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0} is not set on the server.")]
    MissingApiKey(&'static str),

    #[error("{message}")]
    Upstream {
        message: String,
        detail: Option<String>,
    },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(message: impl Into<String>) -> Self {
        AppError::Upstream {
            message: message.into(),
            detail: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            e @ AppError::MissingApiKey(_) => {
                tracing::error!("{e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None)
            }
            AppError::Upstream { message, detail } => {
                tracing::error!("Upstream error: {message} {detail:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access learning data.".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match detail {
            Some(detail) => json!({ "error": message, "detail": detail }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = render(AppError::Validation("Invalid JSON body.".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON body.");
    }

    #[tokio::test]
    async fn test_missing_key_names_the_variable() {
        let (status, body) = render(AppError::MissingApiKey("OPENAI_API_KEY")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "OPENAI_API_KEY is not set on the server.");
    }

    #[tokio::test]
    async fn test_upstream_detail_is_forwarded() {
        let err = AppError::Upstream {
            message: "Gemini API error".into(),
            detail: Some("quota exceeded".into()),
        };
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Gemini API error");
        assert_eq!(body["detail"], "quota exceeded");
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let (_, body) = render(AppError::Internal(anyhow::anyhow!("disk on fire"))).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("detail").is_none());
    }
}
