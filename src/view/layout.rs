//! Screen layout and rendering.
//!
//! Pure geometry (`calculate_layout`) is kept apart from drawing so the
//! event loop can hit-test clicks against exactly what was drawn.

use crate::state::{AppState, Focus, HitLayout};
use crate::view::dropdown::Dropdown;
use crate::view::notification::{close_glyph_area, toast_area, Toast};
use crate::view::styles::Styles;
use crate::view::suburb_field::SuburbField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const BUTTON_WIDTH: u16 = 14;
pub const FORM_HEIGHT: u16 = 3;

const TITLE: &str = "Echelon Realty · Find your next address";
const HINTS: &str = "↑/↓ highlight · Enter accept · Esc close · Tab focus · Ctrl+S search · Ctrl+Q quit";

/// Where each part of the screen was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub field: Rect,
    pub button: Rect,
    /// Dropdown overlay below the field; `None` while closed or without room.
    pub dropdown: Option<Rect>,
    /// Index of the match drawn on the first dropdown row.
    pub dropdown_offset: usize,
    /// Toast overlay below the form; `None` without a visible notification.
    pub toast: Option<Rect>,
    pub status: Rect,
}

impl ScreenLayout {
    /// Click regions for the mouse handler.
    pub fn hit_layout(&self, state: &AppState) -> HitLayout {
        let dropdown_items = self.dropdown.map_or(0, |area| {
            let remaining = state
                .autocomplete
                .matches()
                .len()
                .saturating_sub(self.dropdown_offset);
            (area.height.saturating_sub(2) as usize).min(remaining)
        });
        HitLayout {
            field: self.field,
            button: self.button,
            dropdown: self.dropdown,
            dropdown_items,
            dropdown_offset: self.dropdown_offset,
            notification: self.toast,
            notification_close: self.toast.and_then(close_glyph_area),
        }
    }
}

/// Compute the layout for a frame of size `area`.
pub fn calculate_layout(area: Rect, state: &AppState) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Header
            Constraint::Length(1),           // Spacer
            Constraint::Length(FORM_HEIGHT), // Field + button
            Constraint::Min(0),              // Room for the dropdown
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[2]);

    let field = form[0];
    let status = rows[4];

    let view = state.autocomplete.view();
    let needed = Dropdown::height_for(&view);
    let room = status.y.saturating_sub(field.bottom());
    let height = needed.min(room);
    let dropdown = (height >= 3).then(|| Rect::new(field.x, field.bottom(), field.width, height));
    let dropdown_offset = dropdown.map_or(0, |area| {
        Dropdown::scroll_offset(&view, area.height.saturating_sub(2) as usize)
    });

    // Keeps the form row, and the button label, uncovered
    let toast = state
        .notifications
        .current()
        .map(|_| toast_area(rows[3]))
        .filter(|rect| rect.width > 0 && rect.height >= 3);

    ScreenLayout {
        header: rows[0],
        field,
        button: form[2],
        dropdown,
        dropdown_offset,
        toast,
        status,
    }
}

/// Draw the whole screen. Overlays (dropdown, toast) are drawn last.
pub fn render_layout(frame: &mut Frame, state: &AppState, layout: &ScreenLayout, styles: Styles) {
    frame.render_widget(
        Paragraph::new(Line::styled(TITLE, styles.title())),
        layout.header,
    );

    frame.render_widget(
        SuburbField::new(&state.field, state.focus == Focus::SuburbField, styles),
        layout.field,
    );

    render_button(frame, state, layout.button, styles);

    frame.render_widget(
        Paragraph::new(Line::styled(HINTS, styles.hint())),
        layout.status,
    );

    if let Some(area) = layout.dropdown {
        let view = state.autocomplete.view();
        frame.render_widget(
            Dropdown::new(&view, styles).offset(layout.dropdown_offset),
            area,
        );
    }

    if let (Some(area), Some(notification)) = (layout.toast, state.notifications.current()) {
        frame.render_widget(Toast::new(notification, styles), area);
    }
}

fn render_button(frame: &mut Frame, state: &AppState, area: Rect, styles: Styles) {
    let searching = state.search.is_searching();
    let label = if searching { "Searching…" } else { "Search" };
    let focused = state.focus == Focus::SearchButton;

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(styles.button(focused, searching))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border(focused)),
        );
    frame.render_widget(button, area);
}
