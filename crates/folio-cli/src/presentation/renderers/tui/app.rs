use folio_engine::{Action, Transition};
use folio_runtime::BrowserSession;
use folio_types::ProjectId;
use ratatui::widgets::ListState;

use super::keymap::UiCommand;
use crate::presentation::presenters::{present_detail, present_gallery};
use crate::presentation::view_models::{DetailViewModel, GalleryViewModel};

pub(crate) struct AppState {
    pub session: BrowserSession,
    /// Card cursor; clamped to the visible list before every draw
    pub list_state: ListState,
    pub status_message: String,
    /// Set when the next loop iteration has to repaint
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: BrowserSession) -> Self {
        let mut state = Self {
            status_message: format!("Catalog: {}", session.source()),
            session,
            list_state: ListState::default(),
            needs_redraw: true,
            should_quit: false,
        };
        state.clamp_cursor();
        state
    }

    pub fn gallery(&self) -> GalleryViewModel {
        present_gallery(self.session.browser())
    }

    pub fn detail(&self) -> Option<DetailViewModel> {
        let browser = self.session.browser();
        let project = browser.open_project()?;
        let section = browser.selection().active_section();
        Some(present_detail(project, section))
    }

    pub fn is_detail_open(&self) -> bool {
        self.session.browser().selection().is_detail_open()
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.session.browser().visible_projects().len();
        let clamped = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(clamped);
    }

    fn selected_project_id(&self) -> Option<ProjectId> {
        let index = self.list_state.selected()?;
        self.session
            .browser()
            .visible_projects()
            .get(index)
            .map(|project| project.id.clone())
    }

    pub fn apply(&mut self, command: UiCommand) {
        let active_filter = self.session.browser().active_filter();
        let active_section = self.session.browser().selection().active_section();

        let transition = match command {
            UiCommand::Quit => {
                self.should_quit = true;
                return;
            }
            UiCommand::SelectTab(filter) => self.session.dispatch(Action::SetFilter(filter)),
            UiCommand::NextTab => self
                .session
                .dispatch(Action::SetFilter(active_filter.next())),
            UiCommand::PreviousTab => self
                .session
                .dispatch(Action::SetFilter(active_filter.previous())),
            UiCommand::CursorDown => {
                let len = self.session.browser().visible_projects().len();
                if let Some(i) = self.list_state.selected() {
                    if i + 1 < len {
                        self.list_state.select(Some(i + 1));
                        self.needs_redraw = true;
                    }
                }
                return;
            }
            UiCommand::CursorUp => {
                if let Some(i) = self.list_state.selected() {
                    if i > 0 {
                        self.list_state.select(Some(i - 1));
                        self.needs_redraw = true;
                    }
                }
                return;
            }
            UiCommand::OpenSelected => match self.selected_project_id() {
                Some(id) => self.session.dispatch(Action::Open(id)),
                None => return,
            },
            UiCommand::NextSection => self
                .session
                .dispatch(Action::SelectSection(active_section.next())),
            UiCommand::PreviousSection => self
                .session
                .dispatch(Action::SelectSection(active_section.previous())),
            UiCommand::JumpToSection(section) => {
                self.session.dispatch(Action::SelectSection(section))
            }
            UiCommand::CloseDetail => self.session.dispatch(Action::Close),
        };

        self.on_transition(&transition);
    }

    fn on_transition(&mut self, transition: &Transition) {
        if !transition.is_change() {
            return;
        }
        self.needs_redraw = true;

        match transition {
            Transition::FilterChanged { to, .. } => {
                self.list_state.select(Some(0));
                self.status_message = format!("Showing {}", to.label());
            }
            Transition::Opened(opened) if opened.fell_back => {
                self.status_message = format!(
                    "Project '{}' not found; showing '{}'",
                    opened.requested, opened.resolved
                );
            }
            Transition::Opened(_) => self.status_message.clear(),
            Transition::Closed(_) => {
                let filter = self.session.browser().active_filter();
                self.status_message = format!("Showing {}", filter.label());
            }
            _ => {}
        }
        self.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::builtin;
    use folio_runtime::{CatalogSource, Config};
    use folio_types::{Category, CategoryFilter, Section};

    fn app() -> AppState {
        let session = BrowserSession::with_projects(
            CatalogSource::Builtin,
            builtin::default_projects(),
            &Config::default(),
        )
        .unwrap();
        AppState::new(session)
    }

    #[test]
    fn test_cursor_starts_on_first_card() {
        let app = app();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_cursor_stops_at_last_card() {
        let mut app = app();
        for _ in 0..10 {
            app.apply(UiCommand::CursorDown);
        }
        assert_eq!(app.list_state.selected(), Some(5));
    }

    #[test]
    fn test_tab_change_resets_cursor() {
        let mut app = app();
        app.apply(UiCommand::CursorDown);
        app.apply(UiCommand::CursorDown);

        app.apply(UiCommand::SelectTab(CategoryFilter::Only(Category::Analysis)));

        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.gallery().projects.len(), 2);
    }

    #[test]
    fn test_open_cycle_and_close() {
        let mut app = app();
        app.apply(UiCommand::SelectTab(CategoryFilter::Only(Category::Analysis)));
        app.apply(UiCommand::CursorDown);
        app.apply(UiCommand::OpenSelected);

        let detail = app.detail().unwrap();
        assert_eq!(detail.id, "4");
        assert_eq!(detail.active_section, "overview");

        app.apply(UiCommand::PreviousSection);
        assert_eq!(
            app.session.browser().selection().active_section(),
            Section::Conclusion
        );

        app.apply(UiCommand::CloseDetail);
        assert!(!app.is_detail_open());
        assert!(app.detail().is_none());
    }

    #[test]
    fn test_only_state_changes_request_a_redraw() {
        let mut app = app();
        app.needs_redraw = false;

        app.apply(UiCommand::SelectTab(CategoryFilter::All));
        app.apply(UiCommand::CursorUp);
        app.apply(UiCommand::NextSection);
        assert!(!app.needs_redraw);

        app.apply(UiCommand::SelectTab(CategoryFilter::Only(Category::Dashboard)));
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.apply(UiCommand::CursorDown);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.apply(UiCommand::Quit);
        assert!(app.should_quit);
    }
}
