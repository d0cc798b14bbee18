//! Server-rendered pages: home, projects, learning journey and resume.

use chrono::{DateTime, Datelike, Utc};

use crate::llm_client::prompts::fill;

pub mod handlers;
pub mod manifest;
pub mod templates;

pub const SITE_TITLE: &str = "Madhusudhan JS | Portfolio";
pub const SITE_DESCRIPTION: &str = "Full Stack Developer Portfolio of Madhusudhan J S";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps page `content` (already markup) in the site layout.
pub fn render_page(title: &str, description: &str, content: &str, now: DateTime<Utc>) -> String {
    fill(
        templates::LAYOUT,
        &[
            ("title", &escape_html(title)),
            ("description", &escape_html(description)),
            ("content", content),
            ("year", &now.year().to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_page_escapes_title_not_content() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        let html = render_page("A <b>", "d", "<p>ok</p>", now);
        assert!(html.contains("<title>A &lt;b&gt;</title>"));
        assert!(html.contains("<p>ok</p>"));
        assert!(html.contains("© 2026 Madhusudhan J S"));
    }
}
