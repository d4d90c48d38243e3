pub mod changelog;
pub mod content;
pub mod versioning;

// Re-export commonly used types
pub use changelog::{ChangelogMap, ChangelogStore, CHANGELOG_FILE_NAME};
pub use content::{
    BuildStatus, DownloadPackage, SupportedBuild, BLURB, DOWNLOAD_PACKAGES, INSTALL_NOTE,
    INSTALL_STEPS, LOGO_FILE_NAME, QUICK_INSTALL_SUMMARY, SITE_TITLE, SUPPORTED_BUILDS,
    TUTORIAL_URL,
};
pub use versioning::{is_version_like, version_fragment};
