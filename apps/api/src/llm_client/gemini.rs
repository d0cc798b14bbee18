//! Generative-language (`generateContent`) client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{http_client, LlmError};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, when every step is present.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Failure modes of a `generateContent` call, kept apart from [`LlmError`]
/// because a non-2xx reply carries the raw upstream body back to the caller.
#[derive(Debug)]
pub enum GeminiFailure {
    Rejected { status: u16, body: String },
    Client(LlmError),
}

impl From<LlmError> for GeminiFailure {
    fn from(e: LlmError) -> Self {
        GeminiFailure::Client(e)
    }
}

impl From<reqwest::Error> for GeminiFailure {
    fn from(e: reqwest::Error) -> Self {
        GeminiFailure::Client(LlmError::Http(e))
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Single-shot generation; no retries.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<GenerateResponse, GeminiFailure> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingKey("GEMINI_API_KEY"))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini error ({status}): {body}");
            return Err(GeminiFailure::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        debug!("Gemini call succeeded: {} candidate(s)", parsed.candidates.len());
        Ok(parsed)
    }
}
