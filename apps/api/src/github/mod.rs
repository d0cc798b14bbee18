//! GitHub repositories — the data behind the projects page.
//!
//! `AppState` holds an `Arc<dyn RepoSource>`; production uses `GithubClient`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub mod client;
pub mod handlers;
pub mod projects;

pub use client::GithubClient;

/// The subset of the GitHub repository object the site uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub pushed_at: String,
    #[serde(default)]
    pub fork: bool,
}

#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Repositories worth showing, most recently updated first.
    async fn repos(&self) -> Result<Vec<Repo>, AppError>;
}

/// Drops forks and the `<username>.github.io` pages repository.
pub fn visible_repos(repos: Vec<Repo>, username: &str) -> Vec<Repo> {
    let pages_repo = format!("{}.github.io", username.to_lowercase());
    repos
        .into_iter()
        .filter(|r| !r.fork && r.name.to_lowercase() != pages_repo)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::testing::repo;
    use super::*;

    #[test]
    fn test_visible_repos_is_case_insensitive() {
        let mut fork = repo("some-fork");
        fork.fork = true;
        let repos = vec![repo("MadhusudhanJS.GitHub.io"), fork, repo("portfolio")];

        let visible = visible_repos(repos, "Madhusudhanjs");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "portfolio");
    }
}
