use serde::Serialize;
use std::fmt;

use crate::presentation::views::GalleryView;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryViewModel {
    pub active_filter: String,
    pub tabs: Vec<FilterTabViewModel>,
    pub projects: Vec<ProjectCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterTabViewModel {
    pub filter: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Leading tools shown as badges on the card
    pub tool_badges: Vec<String>,
    /// Tools left off the card, shown as "+N"
    pub hidden_tool_count: usize,
}

impl fmt::Display for GalleryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GalleryView::new(self))
    }
}
