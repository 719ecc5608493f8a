//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod autocomplete;
pub mod matcher;
pub mod mouse_handler;
pub mod notification;
pub mod search_form;
pub mod text_field;

// Re-export for convenience
pub use app_state::{AppState, EditKey, Focus, Timings};
pub use autocomplete::{
    Autocomplete, AutocompleteKey, DropdownItem, DropdownState, DropdownView, KeyOutcome,
};
pub use matcher::{find_matches, MAX_MATCHES};
pub use mouse_handler::{hit_test, ClickTarget, HitLayout};
pub use notification::{Notification, NotificationCenter};
pub use search_form::{SearchForm, SearchStatus, SubmitOutcome};
pub use text_field::TextField;
