//! HTML skeleton and styles for the download page.

/// Inline stylesheet. The page ships self-contained, with the logo image as
/// its only optional asset.
pub const PAGE_CSS: &str = r#"
:root {
  --bg-primary: #0f0f0f;
  --bg-secondary: #1a1a1a;
  --bg-tertiary: #252525;
  --text-primary: #ffffff;
  --text-secondary: #a0a0a0;
  --text-muted: #666666;
  --border-color: #333333;
  --accent-green: #059669;
  --accent-blue: #3b82f6;
}

@media (prefers-color-scheme: light) {
  :root {
    --bg-primary: #ffffff;
    --bg-secondary: #f8f9fa;
    --bg-tertiary: #e9ecef;
    --text-primary: #1a1a1a;
    --text-secondary: #495057;
    --text-muted: #868e96;
    --border-color: #dee2e6;
  }
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
  background-color: var(--bg-primary);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.container {
  max-width: 720px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

header {
  text-align: center;
  margin-bottom: 3rem;
}

.logo {
  width: 360px;
  max-width: 100%;
  height: auto;
  opacity: 0.9;
  border-radius: 6px;
  margin-bottom: 1rem;
}

.blurb {
  color: var(--text-secondary);
  font-size: 0.9375rem;
  max-width: 60ch;
  margin: 0 auto;
}

.section {
  margin-bottom: 2.5rem;
}

.section-title {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.card {
  background-color: var(--bg-secondary);
  border-radius: 12px;
  border: 1px solid var(--border-color);
  padding: 1.25rem;
}

.card p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.card a {
  display: inline-block;
  margin-top: 0.75rem;
  color: var(--accent-blue);
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
}

.card a:hover {
  text-decoration: underline;
}

.build-list {
  background-color: var(--bg-secondary);
  border-radius: 12px;
  overflow: hidden;
  border: 1px solid var(--border-color);
}

.build-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border-color);
}

.build-item:last-child {
  border-bottom: none;
}

.build-label {
  font-weight: 500;
}

.build-description {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.badge {
  font-size: 0.75rem;
  font-weight: 600;
  padding: 0.25rem 0.625rem;
  border-radius: 9999px;
}

.badge.supported {
  background-color: rgba(5, 150, 105, 0.15);
  color: var(--accent-green);
}

.badge.verified {
  background-color: rgba(59, 130, 246, 0.15);
  color: var(--accent-blue);
}

.download-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.download-button {
  display: inline-block;
  background-color: var(--accent-green);
  color: #ffffff;
  padding: 0.625rem 1.25rem;
  border-radius: 8px;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
}

.download-button:hover {
  filter: brightness(1.1);
}

.install-steps {
  padding-left: 1.25rem;
  font-size: 0.875rem;
}

.install-steps li {
  margin-bottom: 0.5rem;
}

.install-note {
  color: var(--text-muted);
  font-size: 0.75rem;
}

.changelog-list {
  padding-left: 1.25rem;
  font-size: 0.875rem;
}

.changelog-item {
  margin-bottom: 0.5rem;
}

footer {
  text-align: center;
  padding: 2rem 0;
  color: var(--text-muted);
  font-size: 0.75rem;
  border-top: 1px solid var(--border-color);
  margin-top: 2rem;
}
"#;

/// Minimal HTML escape for text interpolated into the page.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Assembles the full page. Section arguments arrive already rendered and
/// escaped.
#[allow(clippy::too_many_arguments)]
pub fn generate_html(
    title: &str,
    logo: &str,
    blurb: &str,
    builds_html: &str,
    quick_install_html: &str,
    downloads_html: &str,
    install_steps_html: &str,
    install_note: &str,
    changelog_html: &str,
    generated_at: &str,
    generated_at_display: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{title} - supported game builds, downloads, and changelog">
  <title>{title} - Download</title>
  <style>{css}</style>
</head>
<body>
  <div class="container">
    <header>
      <img class="logo" src="{logo}" alt="{title} logo">
      <p class="blurb">{blurb}</p>
    </header>

    <section class="section">
      <h2 class="section-title">Supported Gamebuilds</h2>
      <div class="build-list">
        {builds_html}
      </div>
    </section>

    <section class="section">
      <h2 class="section-title">PowerShell Quick Install</h2>
      <div class="card">
        {quick_install_html}
      </div>
    </section>

    <section class="section">
      <h2 class="section-title">Downloads</h2>
      <div class="download-row">
        {downloads_html}
      </div>
    </section>

    <section class="section" id="install">
      <h2 class="section-title">Install Instructions</h2>
      <ol class="install-steps">
        {install_steps_html}
      </ol>
      <p class="install-note">{install_note}</p>
    </section>

    <section class="section" id="changelog">
      <h2 class="section-title">Changelog</h2>
      <ul class="changelog-list">
        {changelog_html}
      </ul>
    </section>

    <footer>
      <p>Binary packages are hosted externally; this page only links to them.</p>
      <p>Generated at <span data-time="{generated_at}">{generated_at_display}</span></p>
    </footer>
  </div>
</body>
</html>"#,
        title = title,
        logo = logo,
        blurb = blurb,
        builds_html = builds_html,
        quick_install_html = quick_install_html,
        downloads_html = downloads_html,
        install_steps_html = install_steps_html,
        install_note = install_note,
        changelog_html = changelog_html,
        generated_at = generated_at,
        generated_at_display = generated_at_display,
        css = PAGE_CSS,
    )
}
