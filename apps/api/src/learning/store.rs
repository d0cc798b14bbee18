//! JSON-file key-value store for session logs and tasks.
//!
//! Each key is one file (`<dir>/<key>.json`) holding a JSON array. Every
//! mutation rewrites the whole file; the last write wins.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::learning::models::{
    LogEntry, NewLog, NewTask, Task, LOGS_KEY, MIN_SESSION_MINUTES, TASKS_KEY,
};

#[derive(Debug, Default)]
struct Snapshot {
    logs: Vec<LogEntry>,
    tasks: Vec<Task>,
}

impl Snapshot {
    /// Epoch-millis id, bumped past every id already handed out.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let highest = self
            .logs
            .iter()
            .map(|l| l.id)
            .chain(self.tasks.iter().map(|t| t.id))
            .max()
            .unwrap_or(i64::MIN);
        now.timestamp_millis().max(highest.saturating_add(1))
    }
}

pub struct LearningStore {
    dir: PathBuf,
    state: RwLock<Snapshot>,
}

impl LearningStore {
    /// Opens (creating if needed) the store directory and loads both keys.
    /// A missing or unreadable key loads as an empty array.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        let logs: Vec<LogEntry> = load_key(&dir, LOGS_KEY).await;
        let tasks: Vec<Task> = load_key(&dir, TASKS_KEY).await;
        info!(
            "Learning store opened at {}: {} log(s), {} task(s)",
            dir.display(),
            logs.len(),
            tasks.len()
        );

        Ok(Self {
            dir,
            state: RwLock::new(Snapshot { logs, tasks }),
        })
    }

    pub async fn logs(&self) -> Vec<LogEntry> {
        self.state.read().await.logs.clone()
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    // Mutations write the new array to disk before swapping it into memory,
    // so a failed write leaves both unchanged.

    /// Records a session, newest first.
    pub async fn add_log(&self, input: NewLog, now: DateTime<Utc>) -> Result<LogEntry, AppError> {
        let topic = input.topic.trim();
        let note = input.note.trim();
        if topic.is_empty() && note.is_empty() {
            return Err(AppError::Validation(
                "A session needs a topic or a note.".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let entry = LogEntry {
            id: state.next_id(now),
            date: input
                .date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| today(now)),
            time: input.time,
            duration: session_minutes(input.duration),
            category: input.category,
            topic: non_blank_or(topic, "Untitled topic"),
            note: non_blank_or(note, "No notes."),
        };

        let mut logs = Vec::with_capacity(state.logs.len() + 1);
        logs.push(entry.clone());
        logs.extend_from_slice(&state.logs);
        self.persist(LOGS_KEY, &logs).await?;
        state.logs = logs;
        Ok(entry)
    }

    /// Adds a pending task, newest first.
    pub async fn add_task(&self, input: NewTask, now: DateTime<Utc>) -> Result<Task, AppError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Task text cannot be empty.".to_string()));
        }

        let mut state = self.state.write().await;
        let task = Task {
            id: state.next_id(now),
            text: text.to_string(),
            due_date: input
                .due_date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| today(now)),
            done: false,
        };

        let mut tasks = Vec::with_capacity(state.tasks.len() + 1);
        tasks.push(task.clone());
        tasks.extend_from_slice(&state.tasks);
        self.persist(TASKS_KEY, &tasks).await?;
        state.tasks = tasks;
        Ok(task)
    }

    /// Flips a task between pending and completed.
    pub async fn toggle_task(&self, id: i64) -> Result<Task, AppError> {
        let mut state = self.state.write().await;
        let mut tasks = state.tasks.clone();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Task {id} not found")))?;
        task.done = !task.done;
        let toggled = task.clone();

        self.persist(TASKS_KEY, &tasks).await?;
        state.tasks = tasks;
        Ok(toggled)
    }

    async fn persist<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let json = serde_json::to_vec(items).map_err(anyhow::Error::from)?;
        tokio::fs::write(key_path(&self.dir, key), json).await?;
        Ok(())
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

async fn load_key<T: DeserializeOwned>(dir: &Path, key: &str) -> Vec<T> {
    let path = key_path(dir, key);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Error loading {}: {e}", path.display());
            return Vec::new();
        }
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        warn!("Discarding unreadable {}: {e}", path.display());
        Vec::new()
    })
}

/// At least `MIN_SESSION_MINUTES`; a missing or negative value counts as zero.
fn session_minutes(duration: Option<i64>) -> u32 {
    let minutes = duration.unwrap_or(0).max(i64::from(MIN_SESSION_MINUTES));
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

fn today(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
