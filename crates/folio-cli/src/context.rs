use anyhow::Result;
use folio_runtime::{BrowserSession, Config, SessionOptions};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

/// Per-invocation state shared by the handlers
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_override: Option<PathBuf>,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_override: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            catalog_override,
            config: OnceCell::new(),
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_in(&self.data_dir).map_err(Into::into))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            data_dir: self.data_dir.clone(),
            catalog_override: self.catalog_override.clone(),
        }
    }

    /// Load the catalog and start a browsing session
    pub fn start_session(&self) -> Result<BrowserSession> {
        let session = BrowserSession::start(self.config()?, &self.session_options())?;
        Ok(session)
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_runtime::{write_catalog_json, CONFIG_FILE_NAME};
    use folio_types::{Category, Project};
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), None, OutputFormat::Plain);

        assert!(ctx.config()?.catalog.is_none());
        assert_eq!(ctx.start_session()?.browser().catalog().len(), 6);
        Ok(())
    }

    #[test]
    fn test_relative_catalog_resolves_against_data_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_catalog_json(
            &temp_dir.path().join("mine.json"),
            &[Project::new("m", "Mine", "", Category::Analysis, "")],
        )?;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "catalog = \"mine.json\"\n",
        )?;

        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), None, OutputFormat::Plain);
        let session = ctx.start_session()?;

        assert_eq!(session.browser().catalog().len(), 1);
        Ok(())
    }
}
