use crate::{Error, Result};
use folio_types::{CategoryFilter, ProjectId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.folio (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FOLIO_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("folio"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".folio"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Contents of `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog file; relative paths are taken from the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Project opened when a requested id does not exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<ProjectId>,

    /// Gallery tab selected when a session starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_filter: Option<CategoryFilter>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` from a data directory
    pub fn load_in(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Catalog path resolved against `base_dir`
    pub fn catalog_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| {
            let expanded = expand_tilde(&path.to_string_lossy());
            if expanded.is_absolute() {
                expanded
            } else {
                base_dir.join(expanded)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Category;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog.is_none());
        assert!(config.default_project.is_none());
        assert!(config.initial_filter.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            catalog: Some(PathBuf::from("catalog.json")),
            default_project: Some(ProjectId::new("3")),
            initial_filter: Some(CategoryFilter::Only(Category::Analysis)),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        let raw = std::fs::read_to_string(&config_path)?;
        assert!(raw.contains("initial_filter = \"analysis\""));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_initial_filter_is_a_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "initial_filter = \"charts\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Invalid filter value"));

        Ok(())
    }

    #[test]
    fn test_relative_catalog_path_uses_base_dir() {
        let config = Config {
            catalog: Some(PathBuf::from("data/catalog.toml")),
            ..Config::default()
        };
        assert_eq!(
            config.catalog_path(Path::new("/srv/folio")),
            Some(PathBuf::from("/srv/folio/data/catalog.toml"))
        );

        let absolute = Config {
            catalog: Some(PathBuf::from("/tmp/catalog.json")),
            ..Config::default()
        };
        assert_eq!(
            absolute.catalog_path(Path::new("/srv/folio")),
            Some(PathBuf::from("/tmp/catalog.json"))
        );
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        let resolved = resolve_workspace_path(Some("/opt/folio-data"))?;
        assert_eq!(resolved, PathBuf::from("/opt/folio-data"));
        Ok(())
    }
}
