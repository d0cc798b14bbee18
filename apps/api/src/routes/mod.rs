pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::coach::handlers as coach;
use crate::github::handlers as github;
use crate::learning::handlers as learning;
use crate::pages::{handlers as pages, manifest};
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/projects", get(pages::handle_projects))
        .route("/learning", get(pages::handle_learning))
        .route("/resume", get(pages::handle_resume))
        .route("/manifest.webmanifest", get(manifest::handle_manifest))
        // GitHub proxy
        .route("/api/github", get(github::handle_list_repos))
        .route("/api/projects", get(github::handle_list_projects))
        // Learning tracker
        .route("/api/learning", get(learning::handle_get_learning))
        .route("/api/learning/logs", post(learning::handle_add_log))
        .route("/api/learning/tasks", post(learning::handle_add_task))
        .route(
            "/api/learning/tasks/:id/toggle",
            patch(learning::handle_toggle_task),
        )
        .route("/api/learning/progress", get(learning::handle_progress))
        .route("/api/learning/summary", get(learning::handle_summary))
        .route(
            "/api/learning/certificates",
            get(learning::handle_certificates),
        )
        // AI proxies
        .route("/api/learning/analyze", post(coach::handle_mentor_analysis))
        .route(
            "/api/ai/learning/analyze",
            post(coach::handle_coach_analysis),
        )
        .route(
            "/api/ai/learning/gemini",
            post(coach::handle_gemini_analysis),
        )
        .route(
            "/api/ai/tailor-resume",
            get(resume::handle_tailor_usage).post(resume::handle_tailor),
        )
        .route("/api/ai/tailor-resume/export", post(resume::handle_export))
        // favicon, resume PDF
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::github::testing::{repo, StaticRepos};

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _dir) =
            AppState::for_tests("http://127.0.0.1:9", Arc::new(StaticRepos(Ok(Vec::new())))).await;
        let (status, body) = get_json(build_router(state), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_github_envelope() {
        let (state, _dir) = AppState::for_tests(
            "http://127.0.0.1:9",
            Arc::new(StaticRepos(Ok(vec![repo("portfolio")]))),
        )
        .await;
        let (status, body) = get_json(build_router(state), "/api/github").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["repos"][0]["name"], "portfolio");
    }

    #[tokio::test]
    async fn test_github_failure_is_500_envelope() {
        let (state, _dir) = AppState::for_tests(
            "http://127.0.0.1:9",
            Arc::new(StaticRepos(Err("GitHub API failed"))),
        )
        .await;
        let (status, body) = get_json(build_router(state), "/api/github").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "GitHub API failed" }));
    }

    #[tokio::test]
    async fn test_projects_api_returns_cards() {
        let (state, _dir) = AppState::for_tests(
            "http://127.0.0.1:9",
            Arc::new(StaticRepos(Ok(vec![repo("java-dsa-notes")]))),
        )
        .await;
        let (_, body) = get_json(build_router(state), "/api/projects").await;
        assert_eq!(body["projects"][0]["title"], "java dsa notes");
        assert_eq!(body["projects"][0]["language"], "N/A");
    }

    #[tokio::test]
    async fn test_static_fallback_serves_public_files() {
        let (state, _dir) =
            AppState::for_tests("http://127.0.0.1:9", Arc::new(StaticRepos(Ok(Vec::new())))).await;
        let resume_dir = state.config.public_dir.join("resume");
        std::fs::create_dir_all(&resume_dir).unwrap();
        std::fs::write(resume_dir.join("Madhusudhan_Resume.pdf"), b"%PDF-1.4").unwrap();

        let response = build_router(state)
            .oneshot(
                Request::get("/resume/Madhusudhan_Resume.pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_manifest_route() {
        let (state, _dir) =
            AppState::for_tests("http://127.0.0.1:9", Arc::new(StaticRepos(Ok(Vec::new())))).await;
        let (status, body) = get_json(build_router(state), "/manifest.webmanifest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Madhusudhan J S");
    }
}
