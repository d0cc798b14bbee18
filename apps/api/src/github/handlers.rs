use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::github::projects::{project_cards, ProjectCard};
use crate::github::Repo;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReposResponse {
    pub repos: Vec<Repo>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectCard>,
}

/// GET /api/github
pub async fn handle_list_repos(
    State(state): State<AppState>,
) -> Result<Json<ReposResponse>, AppError> {
    let repos = state.repos.repos().await?;
    Ok(Json(ReposResponse { repos }))
}

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let repos = state.repos.repos().await?;
    Ok(Json(ProjectsResponse {
        projects: project_cards(&repos),
    }))
}
