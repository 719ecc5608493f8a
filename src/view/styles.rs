//! Palette and styling.
//!
//! Gold accent on navy, matching the brand colours of the marketing site.

use crate::model::NotificationKind;
use ratatui::style::{Color, Modifier, Style};

/// Brand gold, rgb(201, 169, 97).
pub const GOLD: Color = Color::Rgb(201, 169, 97);
/// Brand navy, rgb(26, 35, 50).
pub const NAVY: Color = Color::Rgb(26, 35, 50);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any value of `NO_COLOR`; otherwise colors are on.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Resolved styles for every widget.
///
/// With colors disabled only modifiers (bold, reversed, dim) are used so
/// the UI stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    colors: ColorConfig,
}

impl Styles {
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    pub fn title(&self) -> Style {
        self.fg(GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.fg(GOLD)
        } else {
            Style::default()
        }
    }

    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn dropdown_item(&self) -> Style {
        Style::default()
    }

    pub fn dropdown_selected(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colors.colors_enabled() {
            style.fg(NAVY).bg(GOLD)
        } else {
            style.add_modifier(Modifier::REVERSED)
        }
    }

    pub fn button(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            return Style::default().add_modifier(Modifier::DIM);
        }
        let style = Style::default().add_modifier(Modifier::BOLD);
        if focused {
            if self.colors.colors_enabled() {
                style.fg(NAVY).bg(GOLD)
            } else {
                style.add_modifier(Modifier::REVERSED)
            }
        } else {
            style
        }
    }

    pub fn notification(&self, kind: NotificationKind) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        if kind.uses_accent() {
            Style::default().fg(Color::White).bg(GOLD)
        } else {
            Style::default().fg(Color::White).bg(NAVY)
        }
    }

    pub fn hint(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}
