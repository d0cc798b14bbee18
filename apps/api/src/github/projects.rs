//! Project cards shown on the projects page.

use chrono::DateTime;
use serde::Serialize;

use crate::github::Repo;

/// Per-repo extras that GitHub does not know about, keyed by exact repo name.
struct ProjectExtras {
    repo: &'static str,
    video_url: &'static str,
}

// Add `ProjectExtras { repo: "<exact repo name>", video_url: "<YouTube link>" }` entries here.
const PROJECT_EXTRAS: &[ProjectExtras] = &[];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub language: String,
    pub description: String,
    pub github_url: String,
    pub demo_url: Option<String>,
    pub video_url: Option<String>,
    pub last_updated: String,
}

impl ProjectCard {
    pub fn from_repo(repo: &Repo) -> Self {
        Self::with_extras(repo, PROJECT_EXTRAS)
    }

    fn with_extras(repo: &Repo, extras: &[ProjectExtras]) -> Self {
        let video_url = extras
            .iter()
            .find(|e| e.repo == repo.name)
            .map(|e| e.video_url.to_string());

        ProjectCard {
            id: repo.id,
            name: repo.name.clone(),
            title: repo.name.replace('-', " "),
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            description: repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Project description coming soon.".to_string()),
            github_url: repo.html_url.clone(),
            demo_url: repo.homepage.clone().filter(|h| !h.is_empty()),
            video_url,
            last_updated: display_date(&repo.pushed_at),
        }
    }
}

/// `2026-09-01T10:00:00Z` → `Tue Sep 01 2026`; unparsable input is returned as-is.
fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%a %b %d %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

pub fn project_cards(repos: &[Repo]) -> Vec<ProjectCard> {
    repos.iter().map(ProjectCard::from_repo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::repo;

    #[test]
    fn test_card_fallbacks() {
        let mut r = repo("employee-leave-management-system");
        r.homepage = Some(String::new());

        let card = ProjectCard::from_repo(&r);
        assert_eq!(card.title, "employee leave management system");
        assert_eq!(card.language, "N/A");
        assert_eq!(card.description, "Project description coming soon.");
        assert_eq!(card.demo_url, None);
        assert_eq!(card.video_url, None);
        assert_eq!(card.last_updated, "Tue Sep 01 2026");
    }

    #[test]
    fn test_card_uses_repo_details() {
        let mut r = repo("portfolio");
        r.language = Some("TypeScript".into());
        r.description = Some("My site".into());
        r.homepage = Some("https://example.dev".into());

        let card = ProjectCard::from_repo(&r);
        assert_eq!(card.language, "TypeScript");
        assert_eq!(card.description, "My site");
        assert_eq!(card.demo_url.as_deref(), Some("https://example.dev"));
    }

    #[test]
    fn test_video_extras_match_exact_name() {
        let extras = [ProjectExtras {
            repo: "portfolio",
            video_url: "https://www.youtube.com/watch?v=abc",
        }];
        let card = ProjectCard::with_extras(&repo("portfolio"), &extras);
        assert_eq!(card.video_url.as_deref(), Some("https://www.youtube.com/watch?v=abc"));

        let other = ProjectCard::with_extras(&repo("Portfolio"), &extras);
        assert_eq!(other.video_url, None);
    }

    #[test]
    fn test_bad_timestamp_passes_through() {
        let mut r = repo("x");
        r.pushed_at = "sometime".into();
        assert_eq!(ProjectCard::from_repo(&r).last_updated, "sometime");
    }
}
