use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::github::{visible_repos, Repo, RepoSource};

const USER_AGENT: &str = "Mozilla/5.0";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const FAILURE_MESSAGE: &str = "GitHub API failed";

/// Lists a user's public repositories, revalidating at most once per `ttl`.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    username: String,
    token: Option<String>,
    ttl: Duration,
    cache: Arc<Mutex<Option<(Instant, Vec<Repo>)>>>,
}

impl GithubClient {
    pub fn new(
        base_url: &str,
        username: &str,
        token: Option<String>,
        ttl: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            token,
            ttl,
            cache: Arc::new(Mutex::new(None)),
        })
    }

    async fn fetch(&self) -> Result<Vec<Repo>, AppError> {
        let url = format!("{}/users/{}/repos", self.base_url, self.username);
        let mut request = self
            .client
            .get(&url)
            .query(&[("sort", "updated")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("GitHub request failed: {e}");
            AppError::upstream(FAILURE_MESSAGE)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("GitHub API returned {status}: {body}");
            return Err(AppError::upstream(FAILURE_MESSAGE));
        }

        let repos: Vec<Repo> = response.json().await.map_err(|e| {
            error!("GitHub response was not a repo list: {e}");
            AppError::upstream(FAILURE_MESSAGE)
        })?;

        let visible = visible_repos(repos, &self.username);
        info!("Fetched {} visible repo(s) for {}", visible.len(), self.username);
        Ok(visible)
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn repos(&self) -> Result<Vec<Repo>, AppError> {
        let mut cache = self.cache.lock().await;
        if let Some((fetched_at, repos)) = cache.as_ref() {
            if fetched_at.elapsed() < self.ttl {
                debug!("Serving {} cached repo(s)", repos.len());
                return Ok(repos.clone());
            }
        }

        // A failed refresh leaves the previous entry untouched.
        let repos = self.fetch().await?;
        *cache = Some((Instant::now(), repos.clone()));
        Ok(repos)
    }
}
