use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::formatters::truncate;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::ProjectCardViewModel;

pub(crate) struct GalleryComponent;

impl Component for GalleryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let gallery = state.gallery();

        if gallery.projects.is_empty() {
            let empty = Paragraph::new("No projects in this category.")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = gallery
            .projects
            .iter()
            .map(|card| card_item(card, width))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut state.list_state);
    }
}

fn card_item(card: &ProjectCardViewModel, width: usize) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", card.category),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let description = Line::from(Span::styled(
        truncate(&card.description, width.max(8)),
        Style::default().fg(Color::Gray),
    ));

    let mut tools: Vec<Span> = card
        .tool_badges
        .iter()
        .map(|tool| Span::styled(format!(" {} ", tool), Style::default().fg(Color::Cyan)))
        .collect();
    if card.hidden_tool_count > 0 {
        tools.push(Span::styled(
            format!(" +{} ", card.hidden_tool_count),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(vec![title, description, Line::from(tools), Line::default()])
}
