use std::sync::Arc;

use crate::config::Config;
use crate::github::RepoSource;
use crate::learning::store::LearningStore;
use crate::llm_client::{ChatClient, GeminiClient};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Repository listing. Default: `GithubClient` with in-process revalidation.
    pub repos: Arc<dyn RepoSource>,
    pub chat: ChatClient,
    pub gemini: GeminiClient,
    pub learning: Arc<LearningStore>,
}

impl AppState {
    /// State wired to `base_url` for every upstream, with a fresh learning store.
    #[cfg(test)]
    pub async fn for_tests(base_url: &str, repos: Arc<dyn RepoSource>) -> (Self, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_tests(base_url, dir.path().join("data"));
        let state = AppState {
            chat: ChatClient::new(base_url, None).unwrap(),
            gemini: GeminiClient::new(base_url, None).unwrap(),
            learning: Arc::new(LearningStore::open(&config.data_dir).await.unwrap()),
            repos,
            config,
        };
        (state, dir)
    }
}
