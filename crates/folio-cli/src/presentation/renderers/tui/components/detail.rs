use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::{DetailViewModel, SectionBodyViewModel};

pub(crate) struct DetailComponent;

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(detail) = state.detail() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(detail.links.len() as u16),
            ])
            .split(area);

        f.render_widget(header(&detail), chunks[0]);
        f.render_widget(section_tabs(&detail), chunks[1]);
        f.render_widget(
            Paragraph::new(body_text(&detail.body)).wrap(Wrap { trim: false }),
            chunks[2],
        );

        let links: Vec<Line> = detail
            .links
            .iter()
            .map(|link| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", link.label),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(link.target.clone()),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(links), chunks[3]);
    }
}

fn header(detail: &DetailViewModel) -> Paragraph<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                detail.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", detail.category),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(Span::styled(
            detail.tools.join(" · "),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            detail.image.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines)
}

fn section_tabs(detail: &DetailViewModel) -> Tabs<'static> {
    let titles: Vec<Line> = detail
        .sections
        .iter()
        .map(|tab| Line::from(tab.label.clone()))
        .collect();
    let selected = detail.sections.iter().position(|tab| tab.active);

    Tabs::new(titles)
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
        )
}

fn body_text(body: &SectionBodyViewModel) -> Text<'static> {
    let bullet = |item: &String| Line::from(format!("  • {}", item));

    match body {
        SectionBodyViewModel::Overview {
            description,
            objectives,
        } => {
            let mut lines = vec![Line::from(description.clone())];
            if !objectives.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Objectives",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.extend(objectives.iter().map(bullet));
            }
            Text::from(lines)
        }
        SectionBodyViewModel::Methodology { text }
        | SectionBodyViewModel::Conclusion { text } => Text::from(text.clone()),
        SectionBodyViewModel::Findings { items } => {
            Text::from(items.iter().map(bullet).collect::<Vec<_>>())
        }
    }
}
