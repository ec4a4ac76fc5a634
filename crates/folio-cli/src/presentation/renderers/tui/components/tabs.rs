use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FilterTabsComponent;

impl Component for FilterTabsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let gallery = state.gallery();
        let selected = gallery.tabs.iter().position(|tab| tab.active);

        let titles: Vec<Line> = gallery
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {} ({})", i + 1, tab.label, tab.count)))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .select(selected.unwrap_or(0))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_widget(tabs, area);
    }
}
