//! Local (non-AI) progress summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::learning::models::{Category, LogEntry};
use crate::learning::progress::{daily_minutes, hours, monthly_minutes, weekly_minutes};

pub const EMPTY_SUMMARY: &str = "No sessions logged yet. Add some learning logs first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusSplit {
    pub java: u32,
    pub dsa: u32,
    pub projects: u32,
}

impl FocusSplit {
    /// Category with a strict maximum share, else "Balanced".
    pub fn main_focus(&self) -> &'static str {
        let FocusSplit { java, dsa, projects } = *self;
        if java > dsa && java > projects {
            "Java / Core"
        } else if dsa > java && dsa > projects {
            "DSA"
        } else if projects > java && projects > dsa {
            "Full-stack / Projects"
        } else {
            "Balanced"
        }
    }
}

fn minutes_in(logs: &[LogEntry], category: Category) -> u64 {
    logs.iter()
        .filter(|l| l.category == category)
        .map(|l| u64::from(l.duration))
        .sum()
}

/// Share of Java / DSA / full-stack minutes. "Other" sessions are left out.
pub fn focus_split(logs: &[LogEntry]) -> FocusSplit {
    let java = minutes_in(logs, Category::Java);
    let dsa = minutes_in(logs, Category::Dsa);
    let projects = minutes_in(logs, Category::FullStack);
    let total = match java + dsa + projects {
        0 => 1,
        n => n,
    };
    let share = |m: u64| (m as f64 / total as f64 * 100.0).round() as u32;

    FocusSplit {
        java: share(java),
        dsa: share(dsa),
        projects: share(projects),
    }
}

pub fn local_summary(logs: &[LogEntry], now: DateTime<Utc>) -> String {
    if logs.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let split = focus_split(logs);

    format!(
        "Summary\n\
         • Sessions: {sessions}\n\
         • Today: {today}h\n\
         • Weekly: {weekly}h\n\
         • Monthly: {monthly}h\n\
         \n\
         Focus\n\
         • Java/Core: {java}%\n\
         • DSA: {dsa}%\n\
         • Projects: {projects}%\n\
         • Main focus: {focus}",
        sessions = logs.len(),
        today = hours(daily_minutes(logs, now)),
        weekly = hours(weekly_minutes(logs, now)),
        monthly = hours(monthly_minutes(logs, now)),
        java = split.java,
        dsa = split.dsa,
        projects = split.projects,
        focus = split.main_focus(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(category: Category, duration: u32) -> LogEntry {
        LogEntry {
            id: 0,
            date: "2026-10-18".into(),
            time: "20:00".into(),
            duration,
            category,
            topic: "t".into(),
            note: "n".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 21, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_logs_message() {
        assert_eq!(local_summary(&[], now()), EMPTY_SUMMARY);
    }

    #[test]
    fn test_focus_split_and_main_focus() {
        let logs = vec![log(Category::Dsa, 120), log(Category::Java, 60), log(Category::FullStack, 60)];
        let split = focus_split(&logs);
        assert_eq!(split, FocusSplit { java: 25, dsa: 50, projects: 25 });
        assert_eq!(split.main_focus(), "DSA");
    }

    #[test]
    fn test_tie_is_balanced() {
        let logs = vec![log(Category::Java, 60), log(Category::Dsa, 60)];
        assert_eq!(focus_split(&logs).main_focus(), "Balanced");
    }

    #[test]
    fn test_only_other_sessions_give_zero_split() {
        let logs = vec![log(Category::Other, 90)];
        let split = focus_split(&logs);
        assert_eq!(split, FocusSplit { java: 0, dsa: 0, projects: 0 });
        assert_eq!(split.main_focus(), "Balanced");
    }

    #[test]
    fn test_large_sessions_split_without_overflow() {
        let big = u32::MAX / 2 + 1;
        let logs = vec![log(Category::Java, big), log(Category::Java, big), log(Category::Dsa, big)];
        let split = focus_split(&logs);
        assert_eq!(split, FocusSplit { java: 67, dsa: 33, projects: 0 });
        assert!(local_summary(&logs, now()).contains("• Main focus: Java / Core"));
    }

    #[test]
    fn test_summary_text_layout() {
        let logs = vec![log(Category::Java, 90), log(Category::FullStack, 30)];
        let text = local_summary(&logs, now());
        assert_eq!(
            text,
            "Summary\n• Sessions: 2\n• Today: 2h\n• Weekly: 2h\n• Monthly: 2h\n\n\
             Focus\n• Java/Core: 75%\n• DSA: 0%\n• Projects: 25%\n• Main focus: Java / Core"
        );
    }
}
