use crate::{Error, Result};
use folio_engine::builtin;
use folio_types::Project;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the catalog of a session comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The bundled six-project gallery
    Builtin,
    /// A `.json` or `.toml` catalog file
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Vec<Project>> {
        match self {
            CatalogSource::Builtin => Ok(builtin::default_projects()),
            CatalogSource::File(path) => load_projects(path),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "built-in catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Document form of a catalog file: `{ "projects": [...] }` or `[[projects]]`
///
/// The `projects` key is required; an empty catalog must say `projects = []`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    projects: Vec<Project>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read catalog records from a file, keeping file order
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let format = CatalogFormat::from_path(path)?;
    if !path.exists() {
        return Err(Error::CatalogNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;

    parse_projects(&content, format).map_err(|err| match err {
        Error::Parse(msg) => Error::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

fn parse_projects(content: &str, format: CatalogFormat) -> Result<Vec<Project>> {
    match format {
        CatalogFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            if value.is_array() {
                Ok(serde_json::from_value(value)?)
            } else {
                let document: CatalogDocument = serde_json::from_value(value)?;
                Ok(document.projects)
            }
        }
        CatalogFormat::Toml => {
            let document: CatalogDocument =
                toml::from_str(content).map_err(|err| Error::Parse(err.to_string()))?;
            Ok(document.projects)
        }
    }
}

/// Write `projects` as a pretty JSON array
pub fn write_catalog_json(path: &Path, projects: &[Project]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(projects)?;
    std::fs::write(path, content)?;
    Ok(())
}
