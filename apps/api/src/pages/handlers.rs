//! Axum route handlers for the HTML pages.

use axum::{extract::State, response::Html};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::github::projects::{project_cards, ProjectCard};
use crate::learning::certificates::carousel_view;
use crate::learning::models::{LogEntry, Task};
use crate::learning::progress::{group_by_date, progress, task_completion, ProgressBar};
use crate::learning::summary::local_summary;
use crate::llm_client::prompts::fill;
use crate::pages::templates::{
    HOME, LEARNING, PROGRESS_BAR, PROJECTS, PROJECT_CARD, RESUME,
};
use crate::pages::{escape_html, render_page, SITE_DESCRIPTION, SITE_TITLE};
use crate::state::AppState;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    let content = fill(HOME, &[("github", &escape_html(&state.config.github_username))]);
    Html(render_page(SITE_TITLE, SITE_DESCRIPTION, &content, Utc::now()))
}

/// GET /projects
///
/// A GitHub failure renders an empty project list rather than an error page.
pub async fn handle_projects(State(state): State<AppState>) -> Html<String> {
    let cards = match state.repos.repos().await {
        Ok(repos) => project_cards(&repos),
        Err(e) => {
            warn!("Projects page rendered without repos: {e}");
            Vec::new()
        }
    };
    let content = fill(PROJECTS, &[("cards", &render_cards(&cards))]);
    Html(render_page(
        "Projects | MAAI",
        "Projects auto-loaded from GitHub.",
        &content,
        Utc::now(),
    ))
}

/// GET /learning
pub async fn handle_learning(State(state): State<AppState>) -> Html<String> {
    let now = Utc::now();
    let logs = state.learning.logs().await;
    let tasks = state.learning.tasks().await;
    Html(render_page(
        "Learning Journey | MAAI",
        "Sessions, tasks and certificates on the way to a product SDE role.",
        &render_learning(&logs, &tasks, now),
        now,
    ))
}

/// GET /resume
pub async fn handle_resume() -> Html<String> {
    Html(render_page(
        "Resume | MAAI",
        "View and download my resume, and use AI to tailor it to specific job descriptions.",
        RESUME,
        Utc::now(),
    ))
}

fn render_cards(cards: &[ProjectCard]) -> String {
    if cards.is_empty() {
        return r#"<p class="muted">No projects to show right now.</p>"#.to_string();
    }

    cards
        .iter()
        .map(|card| {
            let video = match &card.video_url {
                Some(url) => format!(
                    r#"<a href="{}" target="_blank" rel="noreferrer">🎥 Watch Demo Video</a>"#,
                    escape_html(url)
                ),
                None => "<span>🎬 Video coming soon</span>".to_string(),
            };
            let demo = match &card.demo_url {
                Some(url) => format!(
                    r#"<a href="{}" target="_blank" rel="noreferrer">🚀 Live Demo</a>"#,
                    escape_html(url)
                ),
                None => "<span>🌐 Live demo coming soon</span>".to_string(),
            };
            fill(
                PROJECT_CARD,
                &[
                    ("title", &escape_html(&card.title)),
                    ("language", &escape_html(&card.language)),
                    ("description", &escape_html(&card.description)),
                    ("github_url", &escape_html(&card.github_url)),
                    ("video", &video),
                    ("demo", &demo),
                    ("last_updated", &escape_html(&card.last_updated)),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bar(bar: &ProgressBar) -> String {
    fill(
        PROGRESS_BAR,
        &[
            ("label", bar.label),
            ("percent", &bar.percent.to_string()),
            ("hours", &bar.hours.to_string()),
        ],
    )
}

/// `2026-10-18` → `Sun, 18 Oct`; unparsable dates are shown as stored.
fn pretty_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return r#"<p class="muted">No tasks yet. Add your next actions.</p>"#.to_string();
    }
    let items: Vec<String> = tasks
        .iter()
        .map(|t| {
            format!(
                r#"<li class="{class}"><p>{text}</p><p class="muted">Due: {due}</p><span>{status}</span></li>"#,
                class = if t.done { "done" } else { "pending" },
                text = escape_html(&t.text),
                due = escape_html(&pretty_date(&t.due_date)),
                status = if t.done { "Completed" } else { "Pending" },
            )
        })
        .collect();
    format!("<ul>\n{}\n</ul>", items.join("\n"))
}

fn render_sessions(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return r#"<p class="muted">No sessions logged yet.</p>"#.to_string();
    }
    group_by_date(logs)
        .into_iter()
        .map(|(date, entries)| {
            let items: Vec<String> = entries
                .iter()
                .map(|l| {
                    format!(
                        "<li><strong>{topic}</strong> · {category} · {duration} min at {time}<p>{note}</p></li>",
                        topic = escape_html(&l.topic),
                        category = l.category.label(),
                        duration = l.duration,
                        time = escape_html(&l.time),
                        note = escape_html(&l.note),
                    )
                })
                .collect();
            format!(
                "<h3>{}</h3>\n<ul>\n{}\n</ul>",
                escape_html(&pretty_date(&date)),
                items.join("\n")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_learning(logs: &[LogEntry], tasks: &[Task], now: DateTime<Utc>) -> String {
    let cert = carousel_view(0);
    let progress = progress(logs, now);
    let bars: Vec<String> = progress.bars().into_iter().map(render_bar).collect();
    let completion = task_completion(tasks);

    fill(
        LEARNING,
        &[
            ("cert_position", &cert.position),
            ("cert_title", &escape_html(cert.current.title)),
            ("cert_provider", &escape_html(cert.current.provider)),
            ("cert_year", cert.current.year),
            ("cert_tag", &escape_html(cert.current.tag)),
            ("bars", &bars.join("\n")),
            ("summary", &escape_html(&local_summary(logs, now))),
            ("tasks", &render_tasks(tasks)),
            ("completed", &completion.completed.to_string()),
            ("total", &completion.total.to_string()),
            ("sessions", &render_sessions(logs)),
        ],
    )
}
