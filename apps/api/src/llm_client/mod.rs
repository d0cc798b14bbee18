/// LLM clients — the only place the service talks to a language-model API.
///
/// `ChatClient` speaks the OpenAI-compatible chat-completions protocol;
/// `GeminiClient` speaks the generative-language `generateContent` protocol.
/// Handlers build prompts and pick a model; everything on the wire lives here.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} is not set on the server.")]
    MissingKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl LlmError {
    /// Human-readable message suitable for the `{ error }` envelope.
    pub fn user_message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

pub(crate) fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Chat-completions client with retry on 429 and 5xx.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one system + user exchange and returns the raw completion.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn complete(
        &self,
        model: &str,
        temperature: f32,
        system: &str,
        user: &str,
    ) -> Result<ChatCompletion, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingKey("OPENAI_API_KEY"))?;

        let request_body = ChatRequest {
            model,
            temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };
        let url = format!("{}/chat/completions", self.base_url);

        let mut attempt = 0;
        loop {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Chat call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(&request_body)
                .send()
                .await;

            attempt += 1;
            let retries_left = attempt < MAX_RETRIES;

            let response = match response {
                Ok(r) => r,
                Err(e) if retries_left => {
                    warn!("Chat request failed: {e}");
                    continue;
                }
                Err(e) => return Err(LlmError::Http(e)),
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Chat API returned {}: {}", status, body);
                if retries_left {
                    continue;
                }
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: error_message(body),
                });
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: error_message(body),
                });
            }

            let completion: ChatCompletion = response.json().await?;

            if let Some(usage) = &completion.usage {
                debug!(
                    "Chat call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                    model, usage.prompt_tokens, usage.completion_tokens
                );
            }

            return Ok(completion);
        }
    }
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<OpenAiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETION: &str = r#"{
        "choices": [{"message": {"role": "assistant", "content": "Keep going."}}],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3}
    }"#;

    #[test]
    fn test_error_message_extracts_openai_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(error_message(body.to_string()), "Incorrect API key provided");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("bad gateway".to_string()), "bad gateway");
    }

    #[test]
    fn test_text_reads_first_choice() {
        let completion: ChatCompletion = serde_json::from_str(COMPLETION).unwrap();
        assert_eq!(completion.text(), Some("Keep going."));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let client = ChatClient::new("http://127.0.0.1:9", None).unwrap();
        let err = client.complete("gpt-4o-mini", 0.7, "sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingKey("OPENAI_API_KEY")));
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_parses_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"model": "gpt-4o-mini"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPLETION)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), Some("sk-test".into())).unwrap();
        let completion = client
            .complete("gpt-4o-mini", 0.7, "sys", "hi")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(completion.text(), Some("Keep going."));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), Some("sk-bad".into())).unwrap();
        let err = client.complete("gpt-4o-mini", 0.7, "sys", "hi").await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.user_message(), "Incorrect API key provided");
    }

    #[tokio::test]
    async fn test_server_errors_are_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .expect(3)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), Some("sk-test".into())).unwrap();
        let err = client.complete("gpt-4o-mini", 0.7, "sys", "hi").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_recovers_after_transient_server_error() {
        let mut server = mockito::Server::new_async().await;
        let busy = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .expect(1)
            .create_async()
            .await;
        let ok = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPLETION)
            .expect(1)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), Some("sk-test".into())).unwrap();
        let completion = client
            .complete("gpt-4o-mini", 0.7, "sys", "hi")
            .await
            .unwrap();

        busy.assert_async().await;
        ok.assert_async().await;
        assert_eq!(completion.text(), Some("Keep going."));
    }
}
