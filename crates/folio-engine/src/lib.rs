// Engine module - catalog browsing state (filtering, selection, detail sections)
// Pure state and transitions; no I/O, no rendering.

pub mod browser;
pub mod builtin;
pub mod catalog;
pub mod detail;
pub mod selection;

pub use browser::{reduce, Action, Browser, Transition};
pub use catalog::{Catalog, CatalogStore};
pub use detail::{detail_links, section_content, DetailLink, SectionContent};
pub use selection::{resolve, Opened, SectionChange, Selection};

use folio_types::{Project, Result};

// Façade API - Stable public interface for runtime and CLI layers

/// Validate `projects` and wrap them in a fresh browser
pub fn browser_from_projects(projects: Vec<Project>) -> Result<Browser> {
    Ok(Browser::new(Catalog::new(projects)?))
}

/// Browser over the bundled six-project gallery
pub fn default_browser() -> Result<Browser> {
    browser_from_projects(builtin::default_projects())
}
