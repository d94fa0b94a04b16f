//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod event_list;
mod help;
mod layout;
mod overview;
mod search_input;
mod styles;

pub use event_list::{card_lines, marker_lines, EventList};
pub use help::{max_help_scroll, render_help_overlay};
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use overview::{marker_at, place_labels, OverviewPanel};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::{AppError, Era, KeyAction};
use crate::state::{
    handle_navigator_action, handle_scroll_action, search_input_handler, AppState, EraFilter,
    SearchQuery, SearchState,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lines scrolled per mouse wheel notch over the event list.
const WHEEL_SCROLL_LINES: usize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Areas of the last drawn frame, for mouse hit testing.
    last_areas: Option<ScreenAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, palette))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal input and redraws after every handled event.
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(terminal: Terminal<B>, app_state: AppState, palette: Palette) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette,
            last_areas: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if self.app_state.search().is_typing() && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => {
                self.app_state.help_visible = true;
                self.app_state.help_scroll_offset = 0;
            }
            KeyAction::StartSearch => {
                let search = match self.app_state.search().effective_query() {
                    Some(query) => SearchState::Typing {
                        cursor: query.as_str().chars().count(),
                        query: query.as_str().to_string(),
                    },
                    None => SearchState::start_typing(),
                };
                self.app_state.set_search(search);
            }
            KeyAction::CancelSearch => self.app_state.set_search(SearchState::Inactive),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom
            | KeyAction::NextEvent
            | KeyAction::PrevEvent => handle_scroll_action(&mut self.app_state, action),
            KeyAction::ZoomIn
            | KeyAction::ZoomOut
            | KeyAction::PanLeft
            | KeyAction::PanRight
            | KeyAction::ResetView
            | KeyAction::CenterOnSelection
            | KeyAction::ZoomToEra
            | KeyAction::ToggleEra(_)
            | KeyAction::ShowAllEras => handle_navigator_action(&mut self.app_state, action),
        }

        false
    }

    /// Keys while the help overlay is open: close, scroll or quit.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }

        let max_scroll = max_help_scroll(self.terminal_height());
        let page = usize::from(self.terminal_height() / 2).max(1);
        let offset = self.app_state.help_scroll_offset;

        self.app_state.help_scroll_offset = match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => return true,
            Some(KeyAction::Help) => {
                self.app_state.help_visible = false;
                return false;
            }
            Some(KeyAction::ScrollUp) => offset.saturating_sub(1),
            Some(KeyAction::ScrollDown) => offset.saturating_add(1).min(max_scroll),
            Some(KeyAction::PageUp) => offset.saturating_sub(page),
            Some(KeyAction::PageDown) => offset.saturating_add(page).min(max_scroll),
            Some(KeyAction::ScrollToTop) => 0,
            Some(KeyAction::ScrollToBottom) => max_scroll,
            _ => offset,
        };
        false
    }

    /// Text editing keys while typing a search.
    ///
    /// Returns true if the key was consumed.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let current = self.app_state.search().clone();
        let next = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(current, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(current),
            KeyCode::Left => search_input_handler::handle_cursor_left(current),
            KeyCode::Right => search_input_handler::handle_cursor_right(current),
            KeyCode::Enter => search_input_handler::submit_search(current),
            KeyCode::Esc => SearchState::Inactive,
            _ => return false,
        };
        self.app_state.set_search(next);
        true
    }

    /// Handle a mouse event
    ///
    /// Clicks and hovers hit-test the overview markers; the wheel zooms
    /// over the overview and scrolls over the list.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            let max_scroll = max_help_scroll(self.terminal_height());
            let offset = self.app_state.help_scroll_offset;
            match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.app_state.help_scroll_offset = offset.saturating_sub(1);
                }
                MouseEventKind::ScrollDown => {
                    self.app_state.help_scroll_offset = offset.saturating_add(1).min(max_scroll);
                }
                _ => {}
            }
            return;
        }

        let Some(areas) = self.last_areas else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        let over_overview = areas.overview.contains(position);
        let over_list = areas.list.contains(position);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if over_overview => {
                if let Some(id) = marker_at(&self.app_state, areas.overview, mouse.column, mouse.row)
                {
                    debug!(%id, "Marker clicked");
                    self.app_state.select_event(id);
                }
            }
            MouseEventKind::Moved => {
                let hovered = if over_overview {
                    marker_at(&self.app_state, areas.overview, mouse.column, mouse.row)
                } else {
                    None
                };
                self.app_state.set_hovered(hovered);
            }
            MouseEventKind::ScrollUp if over_overview => {
                handle_navigator_action(&mut self.app_state, KeyAction::ZoomIn);
            }
            MouseEventKind::ScrollDown if over_overview => {
                handle_navigator_action(&mut self.app_state, KeyAction::ZoomOut);
            }
            MouseEventKind::ScrollUp if over_list => self.app_state.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown if over_list => {
                self.app_state.scroll_down(WHEEL_SCROLL_LINES);
            }
            _ => {}
        }
    }

    /// Handle a terminal resize event
    ///
    /// The list is re-measured on the next draw; hit areas are stale until then.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        self.last_areas = None;
        self.app_state.set_hovered(None);
    }

    /// Render the current frame
    ///
    /// Applies the list viewport for the current terminal size, then renders.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let search_visible = !matches!(self.app_state.search(), SearchState::Inactive);
        let areas = calculate_areas(frame_area, search_visible);

        self.app_state
            .set_viewport(areas.list.width, usize::from(areas.list.height));
        self.last_areas = Some(areas);

        let palette = self.palette;
        let state = &self.app_state;
        self.terminal
            .draw(|frame| render_layout(frame, state, palette))?;

        Ok(())
    }

    fn terminal_height(&self) -> u16 {
        self.terminal.size().map(|size| size.height).unwrap_or(0)
    }
}

/// Initial filters applied before the first frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Search query applied at startup. Blank queries are ignored.
    pub search: Option<String>,
    /// Eras to show. Empty means all eras.
    pub eras: Vec<Era>,
}

/// Apply startup filters to the state.
pub fn apply_startup_options(state: &mut AppState, options: &StartupOptions) {
    if let Some(raw) = &options.search {
        match SearchQuery::new(raw.as_str()) {
            Some(query) => state.set_search(SearchState::Active { query }),
            None => warn!("Ignoring blank --search query"),
        }
    }
    if !options.eras.is_empty() {
        state.set_era_filter(EraFilter::only(options.eras.iter().copied()));
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    mut app_state: AppState,
    options: StartupOptions,
    palette: Palette,
) -> Result<(), TuiError> {
    apply_startup_options(&mut app_state, &options);
    info!(
        events = app_state.dataset().len(),
        visible = app_state.active_ids().len(),
        "Starting TUI"
    );

    let mut app = TuiApp::new(app_state, palette)?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
