//! Autocomplete dropdown widget.
//!
//! Draws a [`DropdownView`] and nothing else; all state lives in the
//! autocomplete widget.

use crate::state::DropdownView;
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Marker drawn before the selected item.
pub const SELECTED_MARKER: &str = "> ";

pub struct Dropdown<'a> {
    view: &'a DropdownView,
    styles: Styles,
    offset: usize,
}

impl<'a> Dropdown<'a> {
    pub fn new(view: &'a DropdownView, styles: Styles) -> Self {
        Self {
            view,
            styles,
            offset: 0,
        }
    }

    /// Index of the first item to draw. Hit-testing must use the same value.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Height needed to show every item plus borders.
    pub fn height_for(view: &DropdownView) -> u16 {
        if view.open {
            view.items.len() as u16 + 2
        } else {
            0
        }
    }

    /// First visible item for a dropdown with `visible_rows` item rows.
    ///
    /// Scrolls just far enough to keep the selected item on the last row.
    pub fn scroll_offset(view: &DropdownView, visible_rows: usize) -> usize {
        match view.selected_index() {
            Some(selected) if visible_rows > 0 && selected >= visible_rows => {
                selected + 1 - visible_rows
            }
            _ => 0,
        }
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.view.open || area.height == 0 {
            return;
        }

        // Overlay: wipe whatever was drawn underneath
        Clear.render(area, buf);

        let items: Vec<ListItem> = self
            .view
            .items
            .iter()
            .map(|item| ListItem::new(item.text.as_str()).style(self.styles.dropdown_item()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_symbol(SELECTED_MARKER)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(self.styles.dropdown_selected());

        let mut state = ListState::default()
            .with_offset(self.offset)
            .with_selected(self.view.selected_index());
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DropdownItem;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn view(selected: Option<usize>) -> DropdownView {
        let items: Vec<DropdownItem> = ["Bondi", "Bondi Beach", "Bondi Junction"]
            .iter()
            .enumerate()
            .map(|(i, text)| DropdownItem {
                text: text.to_string(),
                selected: selected == Some(i),
            })
            .collect();
        DropdownView { open: true, items }
    }

    #[test]
    fn height_covers_items_and_borders() {
        assert_eq!(Dropdown::height_for(&view(None)), 5);
        let closed = DropdownView {
            open: false,
            items: vec![],
        };
        assert_eq!(Dropdown::height_for(&closed), 0);
    }

    #[test]
    fn selected_row_gets_marker() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let v = view(Some(1));
        terminal
            .draw(|frame| {
                frame.render_widget(
                    Dropdown::new(&v, Styles::new(ColorConfig::disabled())),
                    frame.area(),
                )
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let row: String = (1..19).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(row.starts_with("> Bondi Beach"), "row was {:?}", row);
        let other: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(other.starts_with("  Bondi"), "row was {:?}", other);
    }

    fn six_items(selected: Option<usize>) -> DropdownView {
        let items = ["Bondi", "Manly", "Coogee", "Bronte", "Paddington", "Glebe"]
            .iter()
            .enumerate()
            .map(|(i, text)| DropdownItem {
                text: text.to_string(),
                selected: selected == Some(i),
            })
            .collect();
        DropdownView { open: true, items }
    }

    #[test]
    fn scroll_offset_keeps_selection_on_last_row() {
        assert_eq!(Dropdown::scroll_offset(&six_items(None), 3), 0);
        assert_eq!(Dropdown::scroll_offset(&six_items(Some(2)), 3), 0);
        assert_eq!(Dropdown::scroll_offset(&six_items(Some(3)), 3), 1);
        assert_eq!(Dropdown::scroll_offset(&six_items(Some(5)), 3), 3);
        assert_eq!(Dropdown::scroll_offset(&six_items(Some(5)), 6), 0);
    }

    #[test]
    fn offset_rows_are_the_ones_drawn() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let v = six_items(Some(4));
        let offset = Dropdown::scroll_offset(&v, 3);
        terminal
            .draw(|frame| {
                frame.render_widget(
                    Dropdown::new(&v, Styles::new(ColorConfig::disabled())).offset(offset),
                    frame.area(),
                )
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let row = |y: u16| -> String { (1..19).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(1).starts_with("  Coogee"), "row was {:?}", row(1));
        assert!(row(3).starts_with("> Paddington"), "row was {:?}", row(3));
    }

    #[test]
    fn closed_view_renders_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let closed = DropdownView {
            open: false,
            items: vec![],
        };
        terminal
            .draw(|frame| frame.render_widget(Dropdown::new(&closed, Styles::default()), frame.area()))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
