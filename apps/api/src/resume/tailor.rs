//! Job-description tailoring: the offline summary template, the model prompt,
//! and the plain-text export document.

use serde::Deserialize;

pub const TAILOR_MODEL: &str = "gpt-4o-mini";
pub const TAILOR_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_TITLE: &str = "your role";
pub const EXPORT_FILENAME: &str = "Madhusudhan_Tailored_Resume.txt";

pub const TAILOR_SYSTEM: &str = "You are a resume coach for Madhusudhan J S, a B.Tech computer \
science graduate targeting SDE-1 roles in product companies. Their strengths are Java, data \
structures and algorithms, and full stack projects published on GitHub. Never invent employers, \
degrees or metrics.";

pub const TAILOR_PROMPT: &str = "Write a tailored resume summary for the role: {title}.

JOB DESCRIPTION:
{description}

Answer in plain text with two sections:
1. \"Tailored Summary for {title}\": three bullet points aligning the candidate's Java, DSA and full stack experience with the role.
2. \"Why You're a Match\": the three priorities of the job description, then what to highlight from GitHub projects and consistent learning.
Keep it under 200 words.";

/// Tailoring form input. Both fields are optional and trimmed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

impl TailorRequest {
    /// Trimmed job title, or [`DEFAULT_TITLE`] when blank.
    pub fn title(&self) -> &str {
        self.job_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// The summary returned when no model is available.
pub fn template_summary(title: &str) -> String {
    format!(
        "🔧 Tailored Summary for {title}

• Strong foundation in Java, Data Structures & Algorithms, and backend logic.
• Experience building full-stack projects with clean structure and readable code.
• Excited to contribute to real-world product teams and keep improving problem-solving skills.

🎯 Why You’re a Match
Based on the job description you provided, focus on:
1) Writing clean, maintainable code
2) Owning features end-to-end
3) Learning quickly and adapting to new tools

You can highlight:
- Your GitHub projects and what real problems they solve
- Your consistency in learning (Java, DSA, full stack)
- Your goal to grow into a strong SDE-1 in a product company."
    )
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Plain-text export of a tailored summary, wrapped at `width` columns.
pub fn render_summary_document(title: Option<&str>, content: Option<&str>, width: usize) -> String {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Target Role");
    let heading = format!("Tailored Resume Summary – {title}");

    let body = match content.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => c.to_string(),
        None => format!(
            "Tailored summary for {title}.\n\n(Generate a summary from the AI section first to get a better document.)"
        ),
    };

    let mut out = heading;
    out.push_str("\n\n");
    let wrapped: Vec<String> = body.lines().map(|line| wrap_line(line, width)).collect();
    out.push_str(&wrapped.join("\n"));
    out.push('\n');
    out
}

/// Greedy word wrap; words longer than `width` are left whole.
fn wrap_line(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current = 0usize;
    for word in line.split_whitespace() {
        let len = word.chars().count();
        if current > 0 && current + 1 + len > width {
            out.push('\n');
            current = 0;
        } else if current > 0 {
            out.push(' ');
            current += 1;
        }
        out.push_str(word);
        current += len;
    }
    out
}
