//! Suburb text field widget.

use crate::state::TextField;
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

pub const PLACEHOLDER: &str = "Enter suburb...";

/// Bordered single-line input with a block cursor.
pub struct SuburbField<'a> {
    field: &'a TextField,
    focused: bool,
    styles: Styles,
}

impl<'a> SuburbField<'a> {
    pub fn new(field: &'a TextField, focused: bool, styles: Styles) -> Self {
        Self {
            field,
            focused,
            styles,
        }
    }
}

impl Widget for SuburbField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suburb ")
            .border_style(self.styles.border(self.focused));
        let inner_width = block.inner(area).width as usize;

        let line = if self.field.value().is_empty() && !self.focused {
            Line::from(Span::styled(PLACEHOLDER, self.styles.hint()))
        } else {
            cursor_line(self.field, self.focused, inner_width, self.styles)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Build the visible slice of the value with the cursor cell highlighted.
///
/// Scrolls horizontally so the cursor always stays inside `width` columns.
fn cursor_line(field: &TextField, focused: bool, width: usize, styles: Styles) -> Line<'static> {
    let chars: Vec<char> = field.value().chars().collect();
    let cursor = field.cursor().min(chars.len());
    let start = scroll_start(&chars, cursor, width);

    let before: String = chars[start..cursor].iter().collect();
    let (at, after) = match chars.get(cursor) {
        Some(ch) => (ch.to_string(), chars[cursor + 1..].iter().collect()),
        None => (" ".to_string(), String::new()),
    };

    if !focused {
        return Line::from(format!("{before}{}{after}", at.trim_end()));
    }

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, styles.cursor()),
        Span::raw(after),
    ])
}

/// First visible char index such that `chars[start..cursor]` plus the cursor
/// cell fits in `width` columns.
fn scroll_start(chars: &[char], cursor: usize, width: usize) -> usize {
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}
