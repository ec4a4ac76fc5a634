use serde::Serialize;
use std::fmt;

use crate::presentation::views::InitView;

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub config_status: ConfigStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Created,
    LoadedExisting,
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", InitView::new(self))
    }
}
