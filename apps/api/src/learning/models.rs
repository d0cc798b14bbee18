use serde::{Deserialize, Serialize};

/// Storage key for the session log array.
pub const LOGS_KEY: &str = "maai-learning-logs-v3";
/// Storage key for the task array.
pub const TASKS_KEY: &str = "maai-learning-tasks-v3";

/// Minimum minutes recorded for a single session.
pub const MIN_SESSION_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Java,
    #[serde(rename = "DSA")]
    Dsa,
    FullStack,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Java => "Java / Core",
            Category::Dsa => "DSA",
            Category::FullStack => "Full-stack / Projects",
            Category::Other => "Other",
        }
    }
}

/// One logged study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    /// minutes
    pub duration: u32,
    pub category: Category,
    pub topic: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    /// YYYY-MM-DD
    pub due_date: String,
    pub done: bool,
}

/// Form input for a new session. Missing fields fall back to the form defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLog {
    pub date: Option<String>,
    #[serde(default = "default_time")]
    pub time: String,
    /// Minutes as sent by the form; clamped into range when stored.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub text: String,
    pub due_date: Option<String>,
}

fn default_time() -> String {
    "20:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let cats: Vec<Category> =
            serde_json::from_str(r#"["Java", "DSA", "FullStack", "Other"]"#).unwrap();
        assert_eq!(
            cats,
            vec![Category::Java, Category::Dsa, Category::FullStack, Category::Other]
        );
        assert_eq!(serde_json::to_string(&Category::Dsa).unwrap(), "\"DSA\"");
    }

    #[test]
    fn test_task_uses_camel_case_due_date() {
        let task = Task {
            id: 1,
            text: "5 DSA problems".into(),
            due_date: "2026-10-18".into(),
            done: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2026-10-18");
    }

    #[test]
    fn test_new_log_defaults() {
        let log: NewLog = serde_json::from_str(r#"{"topic": "OOP"}"#).unwrap();
        assert_eq!(log.time, "20:00");
        assert_eq!(log.category, Category::Java);
        assert!(log.date.is_none());
        assert!(log.duration.is_none());
    }

    #[test]
    fn test_new_log_accepts_negative_duration() {
        let log: NewLog = serde_json::from_str(r#"{"topic": "x", "duration": -5}"#).unwrap();
        assert_eq!(log.duration, Some(-5));
    }
}
