pub mod generator;
pub mod templates;

// Re-export main types
pub use generator::{GeneratedFiles, SitePageGenerator};
pub use templates::escape;
