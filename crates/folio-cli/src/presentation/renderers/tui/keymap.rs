use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_types::{CategoryFilter, Section};

/// What a key press asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiCommand {
    Quit,
    SelectTab(CategoryFilter),
    NextTab,
    PreviousTab,
    CursorDown,
    CursorUp,
    OpenSelected,
    NextSection,
    PreviousSection,
    JumpToSection(Section),
    CloseDetail,
}

/// Translate a key press; bindings depend on whether the detail view is open
pub(crate) fn map_key(key: KeyEvent, detail_open: bool) -> Option<UiCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiCommand::Quit);
    }

    if detail_open {
        map_detail_key(key.code)
    } else {
        map_gallery_key(key.code)
    }
}

fn map_gallery_key(code: KeyCode) -> Option<UiCommand> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => UiCommand::Quit,
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            UiCommand::SelectTab(CategoryFilter::TABS[index])
        }
        KeyCode::Tab => UiCommand::NextTab,
        KeyCode::BackTab => UiCommand::PreviousTab,
        KeyCode::Down | KeyCode::Char('j') => UiCommand::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => UiCommand::CursorUp,
        KeyCode::Enter => UiCommand::OpenSelected,
        _ => return None,
    };
    Some(command)
}

fn map_detail_key(code: KeyCode) -> Option<UiCommand> {
    let command = match code {
        KeyCode::Char('q') => UiCommand::Quit,
        KeyCode::Esc | KeyCode::Backspace => UiCommand::CloseDetail,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => UiCommand::NextSection,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => UiCommand::PreviousSection,
        KeyCode::Char('o') => UiCommand::JumpToSection(Section::Overview),
        KeyCode::Char('m') => UiCommand::JumpToSection(Section::Methodology),
        KeyCode::Char('f') => UiCommand::JumpToSection(Section::Findings),
        KeyCode::Char('c') => UiCommand::JumpToSection(Section::Conclusion),
        _ => return None,
    };
    Some(command)
}
