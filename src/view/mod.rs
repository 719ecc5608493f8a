//! TUI rendering and terminal management (impure shell)

pub mod dropdown;
pub mod layout;
pub mod notification;
pub mod styles;
pub mod suburb_field;

pub use dropdown::Dropdown;
pub use layout::{calculate_layout, render_layout, ScreenLayout};
pub use notification::Toast;
pub use styles::{ColorConfig, Styles};
pub use suburb_field::SuburbField;

use crate::config::keybindings::KeyBindings;
use crate::state::{hit_test, AppState, EditKey};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Timer interval driving notification expiry and search completion.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: Styles,
    /// Layout of the last rendered frame (for mouse hit-testing)
    last_layout: Option<ScreenLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    /// If a setup step fails the terminal is restored before returning.
    pub fn new(app_state: AppState, styles: Styles) -> Result<Self, TuiError> {
        let terminal = setup_or_restore(init_terminal, restore_terminal)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Key and mouse events redraw immediately;
    /// timer ticks redraw only when a notification or search changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        while !self.app_state.should_quit {
            let dirty = if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        true
                    }
                    _ => false,
                }
            } else {
                self.app_state.tick(Instant::now())
            };

            if dirty && !self.app_state.should_quit {
                self.draw()?;
            }
        }

        info!("Quit requested");
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an already-initialized terminal
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: Styles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_layout: None,
        }
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Bound keys become actions; unbound printable keys and editing keys go
    /// to the suburb field. Returns true if a redraw is needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ignore release/repeat reports on terminals that send them
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let now = Instant::now();
        if let Some(action) = self.key_bindings.get(key) {
            debug!(action = ?action, "Key action");
            self.app_state.handle_action(action, now);
            return true;
        }

        match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.app_state.handle_char(ch);
            }
            KeyCode::Backspace => self.app_state.handle_edit(EditKey::Backspace),
            KeyCode::Delete => self.app_state.handle_edit(EditKey::Delete),
            KeyCode::Left => self.app_state.handle_edit(EditKey::Left),
            KeyCode::Right => self.app_state.handle_edit(EditKey::Right),
            KeyCode::Home => self.app_state.handle_edit(EditKey::Home),
            KeyCode::End => self.app_state.handle_edit(EditKey::End),
            _ => return false,
        }
        true
    }

    /// Handle a single mouse event
    ///
    /// Only left clicks matter; they are hit-tested against the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let Some(layout) = self.last_layout else {
            return false;
        };

        let target = hit_test(mouse.column, mouse.row, &layout.hit_layout(&self.app_state));
        debug!(target = ?target, column = mouse.column, row = mouse.row, "Click");
        self.app_state.handle_click(target, Instant::now());
        true
    }

    /// Render the current frame and remember its layout
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let layout = calculate_layout(area, &self.app_state);
        self.last_layout = Some(layout);

        let state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, &layout, styles);
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, styles: Styles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(event::EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `setup`; on failure run `restore` and return the setup error.
///
/// A restore failure is logged, never returned, so the original cause
/// reaches the user.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T, TuiError>,
    restore: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(error = %err, "Terminal setup failed, restoring");
            if let Err(restore_err) = restore() {
                warn!(error = %restore_err, "Terminal restore failed");
            }
            Err(err)
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
