use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct StatusBarComponent;

const GALLERY_KEYS: &[(&str, &str)] = &[
    ("[1-4]", "tab "),
    ("[j/k]", "move "),
    ("[enter]", "open "),
    ("[q]", "quit"),
];

const DETAIL_KEYS: &[(&str, &str)] = &[
    ("[h/l]", "section "),
    ("[o/m/f/c]", "jump "),
    ("[esc]", "back "),
    ("[q]", "quit"),
];

impl Component for StatusBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

        let status = Paragraph::new(Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(Color::Green),
        )));
        f.render_widget(status, chunks[0]);

        let keys = if state.is_detail_open() {
            DETAIL_KEYS
        } else {
            GALLERY_KEYS
        };
        let help: Vec<Span> = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::raw(*action),
                ]
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
    }
}
