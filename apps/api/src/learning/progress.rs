//! Progress arithmetic for the daily / weekly / monthly goal bars.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::learning::models::{LogEntry, Task};

pub const DAILY_GOAL_MINUTES: u64 = 150;
pub const WEEKLY_GOAL_MINUTES: u64 = 900;
pub const MONTHLY_GOAL_MINUTES: u64 = 3600;

const WEEK_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBar {
    pub label: &'static str,
    pub minutes: u64,
    pub goal: u64,
    pub hours: u64,
    pub percent: u32,
}

impl ProgressBar {
    fn new(label: &'static str, minutes: u64, goal: u64) -> Self {
        Self {
            label,
            minutes,
            goal,
            hours: hours(minutes),
            percent: pct(minutes, goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub daily: ProgressBar,
    pub weekly: ProgressBar,
    pub monthly: ProgressBar,
}

impl Progress {
    pub fn bars(&self) -> [&ProgressBar; 3] {
        [&self.daily, &self.weekly, &self.monthly]
    }
}

/// Percentage of `goal` reached, capped at 100.
pub fn pct(value: u64, goal: u64) -> u32 {
    if goal == 0 {
        return 100;
    }
    let raw = (value as f64 / goal as f64 * 100.0).round();
    raw.min(100.0) as u32
}

/// Whole hours, rounded half up.
pub fn hours(minutes: u64) -> u64 {
    (minutes as f64 / 60.0).round() as u64
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Minutes logged on `now`'s calendar day.
pub fn daily_minutes(logs: &[LogEntry], now: DateTime<Utc>) -> u64 {
    let today = now.date_naive();
    logs.iter()
        .filter(|l| parse_date(&l.date) == Some(today))
        .map(|l| u64::from(l.duration))
        .sum()
}

/// Minutes from sessions whose date (taken as midnight UTC) is less than
/// seven days before `now`. Future-dated sessions count.
pub fn weekly_minutes(logs: &[LogEntry], now: DateTime<Utc>) -> u64 {
    logs.iter()
        .filter(|l| {
            parse_date(&l.date)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|midnight| {
                    now.timestamp_millis() - midnight.and_utc().timestamp_millis() < WEEK_MILLIS
                })
                .unwrap_or(false)
        })
        .map(|l| u64::from(l.duration))
        .sum()
}

/// Minutes logged in `now`'s calendar month of the same year.
pub fn monthly_minutes(logs: &[LogEntry], now: DateTime<Utc>) -> u64 {
    logs.iter()
        .filter(|l| {
            parse_date(&l.date)
                .map(|d| d.year() == now.year() && d.month() == now.month())
                .unwrap_or(false)
        })
        .map(|l| u64::from(l.duration))
        .sum()
}

pub fn progress(logs: &[LogEntry], now: DateTime<Utc>) -> Progress {
    Progress {
        daily: ProgressBar::new("Daily", daily_minutes(logs, now), DAILY_GOAL_MINUTES),
        weekly: ProgressBar::new("Weekly", weekly_minutes(logs, now), WEEKLY_GOAL_MINUTES),
        monthly: ProgressBar::new("Monthly", monthly_minutes(logs, now), MONTHLY_GOAL_MINUTES),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCompletion {
    pub completed: usize,
    pub total: usize,
}

pub fn task_completion(tasks: &[Task]) -> TaskCompletion {
    TaskCompletion {
        completed: tasks.iter().filter(|t| t.done).count(),
        total: tasks.len(),
    }
}

/// Sessions grouped by date, most recent date first. Order within a date is kept.
pub fn group_by_date(logs: &[LogEntry]) -> Vec<(String, Vec<LogEntry>)> {
    let mut groups: Vec<(String, Vec<LogEntry>)> = Vec::new();
    for log in logs {
        match groups.iter_mut().find(|(date, _)| *date == log.date) {
            Some((_, entries)) => entries.push(log.clone()),
            None => groups.push((log.date.clone(), vec![log.clone()])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::models::Category;
    use chrono::TimeZone;

    fn log(date: &str, duration: u32) -> LogEntry {
        LogEntry {
            id: 0,
            date: date.into(),
            time: "20:00".into(),
            duration,
            category: Category::Java,
            topic: "t".into(),
            note: "n".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_pct_caps_at_hundred() {
        assert_eq!(pct(75, 150), 50);
        assert_eq!(pct(1, 900), 0);
        assert_eq!(pct(5000, 3600), 100);
    }

    #[test]
    fn test_hours_round_half_up() {
        assert_eq!(hours(89), 1);
        assert_eq!(hours(90), 2);
        assert_eq!(hours(29), 0);
    }

    #[test]
    fn test_daily_counts_only_today() {
        let logs = vec![log("2026-10-18", 60), log("2026-10-18", 30), log("2026-10-17", 45)];
        assert_eq!(daily_minutes(&logs, now()), 90);
    }

    #[test]
    fn test_weekly_window_is_seven_days() {
        // 2026-10-11 midnight is 7 days 12h before now: excluded.
        // 2026-10-12 midnight is 6 days 12h before now: included.
        let logs = vec![log("2026-10-11", 100), log("2026-10-12", 50), log("2026-10-25", 20)];
        assert_eq!(weekly_minutes(&logs, now()), 70);
    }

    #[test]
    fn test_monthly_requires_same_year() {
        let logs = vec![log("2026-10-01", 60), log("2025-10-18", 60), log("2026-09-30", 60)];
        assert_eq!(monthly_minutes(&logs, now()), 60);
    }

    #[test]
    fn test_malformed_dates_are_ignored() {
        let logs = vec![log("yesterday", 60)];
        let p = progress(&logs, now());
        assert_eq!(p.daily.minutes + p.weekly.minutes + p.monthly.minutes, 0);
    }

    #[test]
    fn test_progress_bars() {
        let logs = vec![log("2026-10-18", 150), log("2026-10-15", 300)];
        let p = progress(&logs, now());
        assert_eq!(p.daily.percent, 100);
        assert_eq!(p.weekly.minutes, 450);
        assert_eq!(p.weekly.percent, 50);
        assert_eq!(p.monthly.hours, 8);
        assert_eq!(p.monthly.percent, 13);
    }

    #[test]
    fn test_large_sessions_do_not_overflow() {
        let big = u32::MAX / 2 + 1;
        let logs = vec![log("2026-10-18", big), log("2026-10-18", big)];
        let p = progress(&logs, now());
        assert_eq!(p.daily.minutes, 2 * u64::from(big));
        assert_eq!(p.weekly.minutes, p.daily.minutes);
        assert_eq!(p.monthly.percent, 100);
        assert_eq!(p.daily.hours, (p.daily.minutes as f64 / 60.0).round() as u64);
    }

    #[test]
    fn test_group_by_date_descending() {
        let logs = vec![log("2026-10-16", 1), log("2026-10-18", 2), log("2026-10-16", 3)];
        let groups = group_by_date(&logs);
        assert_eq!(groups[0].0, "2026-10-18");
        assert_eq!(groups[1].0, "2026-10-16");
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[1].1[0].duration, 1);
    }

    #[test]
    fn test_task_completion_counts_done() {
        let tasks = vec![
            Task { id: 1, text: "a".into(), due_date: "2026-10-18".into(), done: true },
            Task { id: 2, text: "b".into(), due_date: "2026-10-19".into(), done: false },
        ];
        assert_eq!(task_completion(&tasks), TaskCompletion { completed: 1, total: 2 });
    }
}
