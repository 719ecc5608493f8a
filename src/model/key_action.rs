//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Keys without a binding fall through to text editing in the suburb field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Autocomplete
    /// Move the highlight one item down, stopping at the last match. Default: ↓
    HighlightNext,
    /// Move the highlight one item up, stopping at "nothing highlighted". Default: ↑
    HighlightPrev,
    /// Commit the highlighted match, or press the focused button. Default: Enter
    Accept,
    /// Close the dropdown without touching the typed text. Default: Esc
    Dismiss,

    // Search form
    /// Submit the search form. Default: Ctrl+s
    Submit,
    /// Move keyboard focus to the next control. Default: Tab
    FocusNext,
    /// Move keyboard focus to the previous control. Default: Shift+Tab
    FocusPrev,

    // Notifications
    /// Close the visible notification early. Default: Ctrl+x
    DismissNotification,

    // Application
    /// Exit the application. Default: Ctrl+q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let all = [
            KeyAction::HighlightNext,
            KeyAction::HighlightPrev,
            KeyAction::Accept,
            KeyAction::Dismiss,
            KeyAction::Submit,
            KeyAction::FocusNext,
            KeyAction::FocusPrev,
            KeyAction::DismissNotification,
            KeyAction::Quit,
        ];
        let set: HashSet<KeyAction> = all.iter().copied().collect();
        assert_eq!(set.len(), all.len());
    }
}
