use serde::Serialize;
use std::fmt;

use crate::presentation::views::CheckView;

#[derive(Debug, Clone, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub project_count: usize,
    pub categories: Vec<CategoryCountViewModel>,
    pub fallback: FallbackViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountViewModel {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FallbackViewModel {
    pub id: String,
    pub title: String,
    /// False when the fallback is the built-in showcase project
    pub in_catalog: bool,
}

impl fmt::Display for CheckViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CheckView::new(self))
    }
}
