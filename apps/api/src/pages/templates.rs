// HTML templates for the server-rendered pages.
// `{name}` placeholders are filled with `llm_client::prompts::fill`; every
// value is escaped by the caller unless it is markup built in `pages`.

pub const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="manifest" href="/manifest.webmanifest">
<link rel="icon" href="/favicon.ico">
</head>
<body class="bg-slate-950 text-slate-100">
<div class="min-h-screen flex flex-col">
<main class="flex-1">
{content}
</main>
<footer class="site-footer">© {year} Madhusudhan J S · <span class="brand">MAAI</span></footer>
</div>
</body>
</html>
"#;

pub const HOME: &str = r#"<section class="hero">
<p class="eyebrow">Full Stack Developer</p>
<h1>Madhusudhan J S</h1>
<p>Java, data structures &amp; algorithms and full stack projects, built in public on the way to a product SDE role.</p>
<nav class="hero-links">
<a href="/projects">Projects</a>
<a href="/learning">Learning Journey</a>
<a href="/resume">Resume</a>
<a href="https://github.com/{github}" target="_blank" rel="noreferrer">GitHub</a>
</nav>
</section>
"#;

pub const PROJECTS: &str = r#"<div class="page">
<a href="/" class="back">← Back to Home</a>
<header>
<h1>Projects</h1>
<p>Auto-loaded from my GitHub. Every project is a step toward product-based full stack roles.</p>
</header>
<div class="grid">
{cards}
</div>
</div>
"#;

pub const PROJECT_CARD: &str = r#"<article class="card">
<div class="card-head"><h3>{title}</h3><span class="pill">{language}</span></div>
<p>{description}</p>
<div class="actions">
<a href="{github_url}" target="_blank" rel="noreferrer">🔗 View on GitHub</a>
{video}
{demo}
</div>
<div class="updated">Last updated: {last_updated}</div>
</article>"#;

pub const LEARNING: &str = r#"<div class="page">
<a href="/" class="back">← Back to Home</a>
<header>
<h1>Learning Journey</h1>
<p>Tracking my growth in Java, DSA and full stack with real sessions, tasks and certificates.</p>
</header>
<section class="certificate">
<p class="eyebrow">Certifications · {cert_position}</p>
<h3>{cert_title}</h3>
<p>{cert_provider} · {cert_year} · {cert_tag}</p>
</section>
<section class="progress">
{bars}
</section>
<section class="summary">
<h2>Progress summary</h2>
<pre>{summary}</pre>
</section>
<section class="tasks">
<h2>Tasks</h2>
{tasks}
<p class="muted">Completed tasks: {completed} / {total}</p>
</section>
<section class="sessions">
<h2>Sessions</h2>
{sessions}
</section>
</div>
"#;

pub const PROGRESS_BAR: &str = r#"<div class="bar">
<p>{label}</p>
<div class="track"><div class="fill" style="width: {percent}%"></div></div>
<p class="muted">{hours}h logged · {percent}% of goal</p>
</div>"#;

pub const RESUME: &str = r#"<div class="page">
<a href="/" class="back">← Back to Home</a>
<header>
<h1>Resume</h1>
<p>View or download my latest resume, and use the AI Resume Tailor to generate a version aligned to any job description.</p>
</header>
<section class="card">
<p class="eyebrow">Core document</p>
<h2>Resume – Madhusudhan J S</h2>
<p>This PDF contains my education, skills, projects, and experience.</p>
<a href="/resume/Madhusudhan_Resume.pdf" target="_blank" rel="noreferrer">View Resume</a>
<a href="/resume/Madhusudhan_Resume.pdf" download>Download</a>
<ul>
<li>🎓 B.Tech – Computer Science Engineering</li>
<li>💻 Java · DSA · Full Stack</li>
<li>📍 India</li>
<li>🚀 Target: 10+ LPA Product Role</li>
</ul>
</section>
<section class="card">
<p class="eyebrow">AI Resume Tailor</p>
<h2>Job-specific customization</h2>
<p>Paste any job description and get talking points that align this resume to the role.</p>
<pre>POST /api/ai/tailor-resume
{"jobTitle": "SDE-1", "jobDescription": "..."}</pre>
<p class="muted">Export the result with <code>POST /api/ai/tailor-resume/export</code>.</p>
</section>
</div>
"#;
