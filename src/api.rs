//! Convenience entry point tying the changelog store to the page generator.

use std::error::Error;
use std::path::Path;

use log::warn;

use rampage_data::{ChangelogStore, CHANGELOG_FILE_NAME, LOGO_FILE_NAME};
use rampage_render::{GeneratedFiles, SitePageGenerator};

/// Loads the changelog data from `data_dir` and renders the site into
/// `out_dir`. A missing data file renders a page with an empty changelog
/// section; a missing logo only logs a warning.
pub fn build_site(
    data_dir: &Path,
    out_dir: &Path,
) -> Result<GeneratedFiles, Box<dyn Error + Send + Sync>> {
    let mut store = ChangelogStore::new();
    store.load(&data_dir.join(CHANGELOG_FILE_NAME))?;

    let generator = SitePageGenerator::new(out_dir);
    let files = generator.generate(&store.changelogs)?;
    if !generator.copy_logo(data_dir)? {
        warn!("logo '{}' not found in {}", LOGO_FILE_NAME, data_dir.display());
    }
    Ok(files)
}
