mod app;
mod components;
mod keymap;
mod ui;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_runtime::BrowserSession;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use app::AppState;

/// Interactive gallery on the alternate screen
pub struct TuiRenderer;

impl TuiRenderer {
    /// Run until the user quits
    pub fn run(session: BrowserSession) -> Result<()> {
        enable_raw_mode()?;
        let _guard = TerminalGuard::new(restore_terminal);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            restore_terminal();
            std::process::exit(0);
        })?;

        let mut app_state = AppState::new(session);
        event_loop(&mut terminal, &mut app_state)
    }
}

/// Runs `restore` when dropped, including on early `?` returns during setup
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    while !app_state.should_quit {
        if app_state.needs_redraw {
            terminal.draw(|f| ui::draw(f, app_state))?;
            app_state.needs_redraw = false;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = keymap::map_key(key, app_state.is_detail_open()) {
                        app_state.apply(command);
                    }
                }
                Event::Resize(_, _) => app_state.needs_redraw = true,
                _ => {}
            }
        }
    }

    Ok(())
}
