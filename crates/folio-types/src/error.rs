use std::fmt;

use crate::ProjectId;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Filter value outside `all` and the category enumeration
    InvalidFilterValue(String),

    /// Section name outside the four detail sections
    InvalidSection(String),

    /// Category name outside the closed enumeration
    InvalidCategory(String),

    /// Two catalog entries share the same id
    DuplicateProjectId(ProjectId),

    /// Project id not present in the catalog
    UnknownProject(ProjectId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFilterValue(value) => write!(
                f,
                "Invalid filter value: '{}' (expected one of: all, visualization, analysis, dashboard)",
                value
            ),
            Error::InvalidSection(value) => write!(
                f,
                "Invalid section: '{}' (expected one of: overview, methodology, findings, conclusion)",
                value
            ),
            Error::InvalidCategory(value) => write!(
                f,
                "Invalid category: '{}' (expected one of: visualization, analysis, dashboard)",
                value
            ),
            Error::DuplicateProjectId(id) => write!(f, "Duplicate project id: {}", id),
            Error::UnknownProject(id) => write!(f, "Unknown project: {}", id),
        }
    }
}

impl std::error::Error for Error {}
