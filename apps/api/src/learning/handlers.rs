//! Axum route handlers for the learning tracker.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::AppError;
use crate::learning::certificates::{carousel_view, CarouselView};
use crate::learning::models::{LogEntry, NewLog, NewTask, Task};
use crate::learning::progress::{progress, task_completion, Progress, TaskCompletion};
use crate::learning::summary::{focus_split, local_summary, FocusSplit};
use crate::state::AppState;

#[derive(Serialize)]
pub struct LearningSnapshot {
    pub logs: Vec<LogEntry>,
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub progress: Progress,
    pub tasks: TaskCompletion,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub focus: FocusSplit,
    pub main_focus: &'static str,
}

#[derive(Deserialize)]
pub struct CarouselQuery {
    #[serde(default)]
    pub index: usize,
}

/// Decodes a form body, reporting any failure in the `{ error }` envelope.
fn parse_form<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::Validation("Invalid JSON body.".to_string()))
}

/// GET /api/learning
pub async fn handle_get_learning(State(state): State<AppState>) -> Json<LearningSnapshot> {
    Json(LearningSnapshot {
        logs: state.learning.logs().await,
        tasks: state.learning.tasks().await,
    })
}

/// POST /api/learning/logs
pub async fn handle_add_log(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<LogEntry>), AppError> {
    let req: NewLog = parse_form(&body)?;
    let entry = state.learning.add_log(req, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/learning/tasks
pub async fn handle_add_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let req: NewTask = parse_form(&body)?;
    let task = state.learning.add_task(req, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/learning/tasks/:id/toggle
pub async fn handle_toggle_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    Ok(Json(state.learning.toggle_task(id).await?))
}

/// GET /api/learning/progress
pub async fn handle_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let logs = state.learning.logs().await;
    let tasks = state.learning.tasks().await;
    Json(ProgressResponse {
        progress: progress(&logs, Utc::now()),
        tasks: task_completion(&tasks),
    })
}

/// GET /api/learning/summary
pub async fn handle_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let logs = state.learning.logs().await;
    let focus = focus_split(&logs);
    Json(SummaryResponse {
        summary: local_summary(&logs, Utc::now()),
        main_focus: focus.main_focus(),
        focus,
    })
}

/// GET /api/learning/certificates?index=n
pub async fn handle_certificates(Query(q): Query<CarouselQuery>) -> Json<CarouselView> {
    Json(carousel_view(q.index))
}
