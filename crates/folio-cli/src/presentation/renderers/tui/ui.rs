use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::AppState;
use super::components::{
    Component, DetailComponent, FilterTabsComponent, GalleryComponent, StatusBarComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    state.clamp_cursor();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    FilterTabsComponent.render(f, chunks[0], state);

    if state.is_detail_open() {
        DetailComponent.render(f, chunks[1], state);
    } else {
        GalleryComponent.render(f, chunks[1], state);
    }

    StatusBarComponent.render(f, chunks[2], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tui::keymap::UiCommand;
    use folio_engine::builtin;
    use folio_runtime::{BrowserSession, CatalogSource, Config};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> AppState {
        let session = BrowserSession::with_projects(
            CatalogSource::Builtin,
            builtin::default_projects(),
            &Config::default(),
        )
        .unwrap();
        AppState::new(session)
    }

    fn render(state: &mut AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_gallery_screen_shows_tabs_and_cards() {
        let mut state = app();
        let screen = render(&mut state);

        assert!(screen.contains("1 All Projects (6)"));
        assert!(screen.contains("4 Dashboards (2)"));
        assert!(screen.contains(">> "));
        assert!(screen.contains("[enter]open"));
    }

    #[test]
    fn test_detail_screen_shows_sections_and_links() {
        let mut state = app();
        state.apply(UiCommand::OpenSelected);
        state.apply(UiCommand::JumpToSection(folio_types::Section::Findings));

        let screen = render(&mut state);

        assert!(screen.contains("Methodology"));
        assert!(screen.contains("[esc]back"));
        assert!(!screen.contains(">> "));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = app();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        state.apply(UiCommand::OpenSelected);
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
