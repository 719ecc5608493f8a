//! Suburb autocomplete widget (pure state transitions).
//!
//! The widget owns the candidate set, the last typed query, the visible
//! match list and the keyboard highlight. Hosts feed it input events and
//! apply what it returns: a [`DropdownView`] to draw and, on commit, the text
//! to write back into the field. It never touches a terminal.
//!
//! # Invariants
//!
//! - The dropdown is open iff the match list is non-empty.
//! - The highlight is either `None` or a valid index into the match list.
//! - Closing the dropdown, by any path, empties the match list and clears
//!   the highlight.

use crate::model::CandidateSet;
use crate::state::matcher::find_matches;
use tracing::{debug, trace};

// ===== Inputs and outputs =====

/// Keys the widget reacts to. Everything else is text editing and belongs
/// to the host field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// The host must suppress its default handling of the key.
    pub consumed: bool,
    /// Text the host must write into the field.
    pub commit: Option<String>,
}

/// Visual state of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

/// One rendered row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub text: String,
    pub selected: bool,
}

/// Declarative render description consumed by the view layer.
///
/// At most one item has `selected == true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub open: bool,
    pub items: Vec<DropdownItem>,
}

impl DropdownView {
    /// Index of the selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }
}

// ===== Autocomplete =====

/// Single autocomplete instance. Create one per text field.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    candidates: CandidateSet,
    query: String,
    matches: Vec<String>,
    highlight: Option<usize>,
}

impl Autocomplete {
    /// Create a closed widget over a fixed candidate set.
    pub fn new(candidates: CandidateSet) -> Self {
        Self {
            candidates,
            query: String::new(),
            matches: Vec::new(),
            highlight: None,
        }
    }

    /// Text-change event carrying the full field value.
    ///
    /// Recomputes the match list and clears the highlight. An empty value or
    /// a value matching nothing leaves the dropdown closed.
    pub fn on_input(&mut self, value: &str) {
        self.query = value.to_string();
        self.highlight = None;
        self.matches = find_matches(&self.candidates, value);

        debug!(
            query = %self.query,
            matches = self.matches.len(),
            "Autocomplete query changed"
        );
    }

    /// Key press while the field has focus.
    ///
    /// Arrow keys and Enter are always consumed. Escape closes the dropdown
    /// but is not consumed, mirroring a plain text field.
    pub fn on_key(&mut self, key: AutocompleteKey) -> KeyOutcome {
        match key {
            AutocompleteKey::ArrowDown => {
                if let Some(last) = self.matches.len().checked_sub(1) {
                    self.highlight = Some(match self.highlight {
                        None => 0,
                        Some(index) => (index + 1).min(last),
                    });
                }
                trace!(highlight = self.highlight_index(), "Highlight moved down");
                KeyOutcome {
                    consumed: true,
                    commit: None,
                }
            }
            AutocompleteKey::ArrowUp => {
                self.highlight = match self.highlight {
                    None | Some(0) => None,
                    Some(index) => Some(index - 1),
                };
                trace!(highlight = self.highlight_index(), "Highlight moved up");
                KeyOutcome {
                    consumed: true,
                    commit: None,
                }
            }
            AutocompleteKey::Enter => {
                let commit = self
                    .highlight
                    .and_then(|index| self.matches.get(index))
                    .cloned();
                if let Some(text) = &commit {
                    debug!(suburb = %text, "Committed highlighted match");
                    self.close();
                }
                KeyOutcome {
                    consumed: true,
                    commit,
                }
            }
            AutocompleteKey::Escape => {
                self.close();
                KeyOutcome {
                    consumed: false,
                    commit: None,
                }
            }
        }
    }

    /// Pointer click on the rendered match at `index`.
    ///
    /// Returns the text to commit. An index outside the match list is
    /// ignored.
    pub fn on_item_click(&mut self, index: usize) -> Option<String> {
        let text = self.matches.get(index).cloned()?;
        debug!(suburb = %text, index, "Committed clicked match");
        self.close();
        Some(text)
    }

    /// Pointer click outside both the field and the dropdown.
    pub fn on_outside_click(&mut self) {
        if self.is_open() {
            debug!("Dropdown dismissed by outside click");
        }
        self.close();
    }

    /// Render description for the current state.
    pub fn view(&self) -> DropdownView {
        DropdownView {
            open: self.is_open(),
            items: self
                .matches
                .iter()
                .enumerate()
                .map(|(index, text)| DropdownItem {
                    text: text.clone(),
                    selected: self.highlight == Some(index),
                })
                .collect(),
        }
    }

    pub fn state(&self) -> DropdownState {
        if self.is_open() {
            DropdownState::Open
        } else {
            DropdownState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Last typed query. Commits do not change it.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Highlight as a signed index, `-1` meaning nothing is highlighted.
    pub fn highlight_index(&self) -> isize {
        self.highlight.map_or(-1, |index| index as isize)
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    fn close(&mut self) {
        self.matches.clear();
        self.highlight = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "autocomplete_tests.rs"]
mod tests;
