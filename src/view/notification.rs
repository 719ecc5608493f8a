//! Toast notification widget.

use crate::state::Notification;
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub const CLOSE_GLYPH: &str = "×";
pub const TOAST_WIDTH: u16 = 40;
pub const TOAST_HEIGHT: u16 = 4;

/// Where the toast sits: bottom-right corner of `region`, clipped to fit.
pub fn toast_area(region: Rect) -> Rect {
    let width = TOAST_WIDTH.min(region.width);
    let height = TOAST_HEIGHT.min(region.height);
    Rect::new(
        region.right().saturating_sub(width),
        region.bottom().saturating_sub(height),
        width,
        height,
    )
}

/// One-cell area of the close glyph on the toast's top border.
pub fn close_glyph_area(toast: Rect) -> Option<Rect> {
    if toast.width < 4 || toast.height == 0 {
        return None;
    }
    Some(Rect::new(toast.right() - 2, toast.y, 1, 1))
}

pub struct Toast<'a> {
    notification: &'a Notification,
    styles: Styles,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification, styles: Styles) -> Self {
        Self {
            notification,
            styles,
        }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        Clear.render(area, buf);

        let style = self.styles.notification(self.notification.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.notification.kind.label()))
            .style(style);

        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);

        if let Some(close) = close_glyph_area(area) {
            buf.set_string(close.x, close.y, CLOSE_GLYPH, style);
        }
    }
}
