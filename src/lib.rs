pub mod api;

// Re-export the site building blocks for embedding
pub use rampage_data::{is_version_like, ChangelogMap, ChangelogStore, CHANGELOG_FILE_NAME};
pub use rampage_render::{GeneratedFiles, SitePageGenerator};
