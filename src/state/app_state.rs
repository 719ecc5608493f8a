//! Application state composing the suburb field, autocomplete, search form
//! and notifications.
//!
//! All transitions are pure apart from the random result count, and take
//! the current time as an argument so tests can drive the clock.

use crate::model::{CandidateSet, KeyAction};
use crate::state::autocomplete::{Autocomplete, AutocompleteKey};
use crate::state::mouse_handler::ClickTarget;
use crate::state::notification::{NotificationCenter, DEFAULT_NOTIFICATION_TIMEOUT};
use crate::state::search_form::{SearchForm, SubmitOutcome, DEFAULT_SEARCH_DELAY};
use crate::state::text_field::TextField;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SuburbField,
    SearchButton,
}

impl Focus {
    /// Two controls, so next and previous are the same move.
    pub fn toggle(self) -> Self {
        match self {
            Focus::SuburbField => Focus::SearchButton,
            Focus::SearchButton => Focus::SuburbField,
        }
    }
}

/// Non-character editing keys for the suburb field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Timing knobs resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub notification_timeout: Duration,
    pub search_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
            search_delay: DEFAULT_SEARCH_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub field: TextField,
    pub autocomplete: Autocomplete,
    pub search: SearchForm,
    pub notifications: NotificationCenter,
    pub focus: Focus,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(candidates: CandidateSet, timings: Timings) -> Self {
        Self {
            field: TextField::new(),
            autocomplete: Autocomplete::new(candidates),
            search: SearchForm::new(timings.search_delay),
            notifications: NotificationCenter::new(timings.notification_timeout),
            focus: Focus::default(),
            should_quit: false,
        }
    }

    /// Pre-fill the suburb field as if the user had typed `query`.
    pub fn set_query(&mut self, query: &str) {
        self.field.set_value(query);
        self.autocomplete.on_input(self.field.value());
    }

    /// Apply a bound key action.
    pub fn handle_action(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::HighlightNext => self.autocomplete_key(AutocompleteKey::ArrowDown),
            KeyAction::HighlightPrev => self.autocomplete_key(AutocompleteKey::ArrowUp),
            KeyAction::Dismiss => self.autocomplete_key(AutocompleteKey::Escape),
            KeyAction::Accept => match self.focus {
                Focus::SuburbField => self.autocomplete_key(AutocompleteKey::Enter),
                Focus::SearchButton => self.submit(now),
            },
            KeyAction::Submit => self.submit(now),
            KeyAction::FocusNext | KeyAction::FocusPrev => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyAction::DismissNotification => self.notifications.dismiss(),
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Printable character typed while the field has focus.
    pub fn handle_char(&mut self, ch: char) {
        if self.focus != Focus::SuburbField {
            return;
        }
        if self.field.insert_char(ch) {
            self.autocomplete.on_input(self.field.value());
        }
    }

    /// Editing key pressed while the field has focus.
    pub fn handle_edit(&mut self, key: EditKey) {
        if self.focus != Focus::SuburbField {
            return;
        }
        let changed = match key {
            EditKey::Backspace => self.field.backspace(),
            EditKey::Delete => self.field.delete(),
            EditKey::Left => {
                self.field.cursor_left();
                false
            }
            EditKey::Right => {
                self.field.cursor_right();
                false
            }
            EditKey::Home => {
                self.field.cursor_home();
                false
            }
            EditKey::End => {
                self.field.cursor_end();
                false
            }
        };
        if changed {
            self.autocomplete.on_input(self.field.value());
        }
    }

    /// Left click on a hit-tested target.
    ///
    /// Anything outside the field and dropdown dismisses the dropdown before
    /// the target's own effect runs.
    pub fn handle_click(&mut self, target: ClickTarget, now: Instant) {
        if target.is_outside_autocomplete() {
            self.autocomplete.on_outside_click();
        }

        match target {
            ClickTarget::SuburbField => self.focus = Focus::SuburbField,
            ClickTarget::DropdownItem(index) => {
                if let Some(text) = self.autocomplete.on_item_click(index) {
                    self.field.set_value(text);
                    self.focus = Focus::SuburbField;
                }
            }
            ClickTarget::SearchButton => {
                self.focus = Focus::SearchButton;
                self.submit(now);
            }
            ClickTarget::NotificationClose => self.notifications.dismiss(),
            ClickTarget::Notification | ClickTarget::DropdownChrome | ClickTarget::Elsewhere => {}
        }
    }

    /// Advance timers. Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut rng = rand::rng();
        let completed = self
            .search
            .tick(now, &mut rng, &mut self.notifications)
            .is_some();
        let expired = self.notifications.tick(now);
        completed || expired
    }

    fn autocomplete_key(&mut self, key: AutocompleteKey) {
        if self.focus != Focus::SuburbField {
            return;
        }
        let outcome = self.autocomplete.on_key(key);
        if let Some(text) = outcome.commit {
            self.field.set_value(text);
        }
    }

    fn submit(&mut self, now: Instant) {
        // Pressing the button is a click outside the dropdown.
        self.autocomplete.on_outside_click();

        let outcome = self
            .search
            .submit(self.field.value(), now, &mut self.notifications);
        if outcome == SubmitOutcome::MissingLocation {
            self.focus = Focus::SuburbField;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
