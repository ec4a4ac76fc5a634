use std::fmt;
use std::path::PathBuf;

/// Result type for folio-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Domain rule violated (invalid filter, duplicate id, ...)
    Domain(folio_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Catalog file could not be parsed
    Parse(String),

    /// Catalog file extension is neither `.json` nor `.toml`
    UnsupportedFormat(PathBuf),

    /// Configured or requested catalog file does not exist
    CatalogNotFound(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::UnsupportedFormat(path) => write!(
                f,
                "Unsupported catalog format: {} (expected .json or .toml)",
                path.display()
            ),
            Error::CatalogNotFound(path) => {
                write!(f, "Catalog file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::Parse(_)
            | Error::UnsupportedFormat(_)
            | Error::CatalogNotFound(_) => None,
        }
    }
}

impl From<folio_types::Error> for Error {
    fn from(err: folio_types::Error) -> Self {
        Error::Domain(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
