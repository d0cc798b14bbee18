use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_GITHUB_USERNAME: &str = "Madhusudhanjs";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
///
/// API keys are optional: a missing key only fails the handler that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub github_username: String,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub github_cache_secs: u64,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            github_username: env_or("GITHUB_USERNAME", DEFAULT_GITHUB_USERNAME),
            github_api_url: env_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            github_token: optional_env("GITHUB_TOKEN"),
            github_cache_secs: std::env::var("GITHUB_CACHE_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("GITHUB_CACHE_SECS must be a whole number of seconds")?,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            public_dir: PathBuf::from(env_or("PUBLIC_DIR", "public")),
        })
    }

    /// Configuration pointing every upstream at `base_url`, with no API keys.
    #[cfg(test)]
    pub fn for_tests(base_url: &str, data_dir: PathBuf) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            github_api_url: base_url.to_string(),
            github_token: None,
            github_cache_secs: 0,
            openai_api_key: None,
            openai_base_url: base_url.to_string(),
            gemini_api_key: None,
            gemini_base_url: base_url.to_string(),
            public_dir: data_dir.join("public"),
            data_dir,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
