use ratatui::{layout::Rect, Frame};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod detail;
pub(crate) mod gallery;
pub(crate) mod status_bar;
pub(crate) mod tabs;

pub(crate) use detail::DetailComponent;
pub(crate) use gallery::GalleryComponent;
pub(crate) use status_bar::StatusBarComponent;
pub(crate) use tabs::FilterTabsComponent;
