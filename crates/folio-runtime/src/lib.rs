pub mod catalog_source;
pub mod config;
pub mod error;
pub mod init;
pub mod session;

pub use catalog_source::{load_projects, write_catalog_json, CatalogSource};
pub use config::{resolve_workspace_path, Config, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use init::{init_workspace, ConfigStatus, InitResult};
pub use session::{BrowserSession, SessionOptions};
