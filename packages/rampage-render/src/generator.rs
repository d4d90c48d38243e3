//! Writes the download page from the changelog map and the static content
//! tables.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;

use crate::templates::{self, escape};
use rampage_data::content::{
    BuildStatus, SupportedBuild, BLURB, DOWNLOAD_PACKAGES, INSTALL_NOTE, INSTALL_STEPS,
    LOGO_FILE_NAME, QUICK_INSTALL_SUMMARY, SITE_TITLE, SUPPORTED_BUILDS, TUTORIAL_URL,
};
use rampage_data::{ChangelogMap, CHANGELOG_FILE_NAME};

pub struct SitePageGenerator {
    output_dir: PathBuf,
}

impl SitePageGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Renders the page and writes `index.html` plus a pretty-printed copy of
    /// the changelog data next to it.
    pub fn generate(
        &self,
        changelogs: &ChangelogMap,
    ) -> Result<GeneratedFiles, Box<dyn Error + Send + Sync>> {
        fs::create_dir_all(&self.output_dir)?;

        let data_json = serde_json::to_string_pretty(changelogs)?;
        let data_file = self.output_dir.join(CHANGELOG_FILE_NAME);
        fs::write(&data_file, &data_json)?;

        let html = self.render_page(changelogs);
        let html_file = self.output_dir.join("index.html");
        fs::write(&html_file, &html)?;
        debug!("wrote {} bytes to {}", html.len(), html_file.display());

        Ok(GeneratedFiles {
            html_path: html_file.to_string_lossy().to_string(),
            data_path: data_file.to_string_lossy().to_string(),
        })
    }

    /// Copies the logo image out of the data directory when it is there.
    /// Returns false when the source image is missing.
    pub fn copy_logo(&self, data_dir: &Path) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let source = data_dir.join(LOGO_FILE_NAME);
        if !source.is_file() {
            return Ok(false);
        }
        fs::copy(&source, self.output_dir.join(LOGO_FILE_NAME))?;
        Ok(true)
    }

    fn render_page(&self, changelogs: &ChangelogMap) -> String {
        let generated_at = Utc::now();
        templates::generate_html(
            SITE_TITLE,
            LOGO_FILE_NAME,
            &escape(BLURB),
            &self.render_builds(),
            &self.render_quick_install(),
            &self.render_downloads(),
            &self.render_install_steps(),
            &escape(INSTALL_NOTE),
            &self.render_changelog(changelogs),
            &generated_at.to_rfc3339(),
            &generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
    }

    fn render_builds(&self) -> String {
        SUPPORTED_BUILDS
            .iter()
            .map(|b| self.render_build(b))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_build(&self, build: &SupportedBuild) -> String {
        let badge_class = match build.status {
            BuildStatus::Supported => "supported",
            BuildStatus::Verified => "verified",
        };

        format!(
            r#"<div class="build-item">
  <div>
    <div class="build-label">{label}</div>
    <div class="build-description">{description}</div>
  </div>
  <span class="badge {badge_class}">{status_text}</span>
</div>"#,
            label = escape(build.label),
            description = escape(build.description),
            badge_class = badge_class,
            status_text = build.status.display_text(),
        )
    }

    fn render_quick_install(&self) -> String {
        format!(
            r#"<p>{summary}</p>
<a href="{url}">Jump to full tutorial</a>"#,
            summary = escape(QUICK_INSTALL_SUMMARY),
            url = TUTORIAL_URL,
        )
    }

    fn render_downloads(&self) -> String {
        DOWNLOAD_PACKAGES
            .iter()
            .map(|p| {
                format!(
                    r#"<a class="download-button" href="{url}">{label}</a>"#,
                    url = p.url,
                    label = escape(p.label),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_install_steps(&self) -> String {
        INSTALL_STEPS
            .iter()
            .map(|step| format!("<li>{}</li>", escape(step)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The latest release's items as list entries. An empty selection renders
    /// an empty list, never an error.
    fn render_changelog(&self, changelogs: &ChangelogMap) -> String {
        changelogs
            .latest_items()
            .iter()
            .map(|item| format!(r#"<li class="changelog-item">{}</li>"#, escape(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Paths of the files written by [`SitePageGenerator::generate`].
pub struct GeneratedFiles {
    pub html_path: String,
    pub data_path: String,
}
