use crate::catalog_source::write_catalog_json;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::Result;
use folio_engine::builtin;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SAMPLE_CATALOG_FILE_NAME: &str = "catalog.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Created,
    LoadedExisting,
}

#[derive(Debug, Clone)]
pub struct InitResult {
    pub config_path: PathBuf,
    pub config_status: ConfigStatus,
    /// Sample catalog written by this run
    pub sample_catalog: Option<PathBuf>,
    pub config: Config,
}

/// Prepare a data directory: config file, optionally a sample catalog
///
/// An existing config is kept; `with_sample` points it at the sample
/// catalog only when it names no catalog yet.
pub fn init_workspace(data_dir: &Path, with_sample: bool) -> Result<InitResult> {
    std::fs::create_dir_all(data_dir)?;

    let config_path = data_dir.join(CONFIG_FILE_NAME);
    let (mut config, config_status) = if config_path.exists() {
        (Config::load_from(&config_path)?, ConfigStatus::LoadedExisting)
    } else {
        (Config::default(), ConfigStatus::Created)
    };

    let mut sample_catalog = None;
    if with_sample {
        let path = data_dir.join(SAMPLE_CATALOG_FILE_NAME);
        write_catalog_json(&path, &builtin::default_projects())?;
        info!(path = %path.display(), "wrote sample catalog");

        if config.catalog.is_none() {
            config.catalog = Some(PathBuf::from(SAMPLE_CATALOG_FILE_NAME));
        }
        sample_catalog = Some(path);
    }

    if config_status == ConfigStatus::Created || with_sample {
        config.save_to(&config_path)?;
        info!(path = %config_path.display(), "saved config");
    }

    Ok(InitResult {
        config_path,
        config_status,
        sample_catalog,
        config,
    })
}
