//! Mouse hit-testing.
//!
//! Pure mapping from a click position to the control under it. The view
//! layer records where it drew each control in a [`HitLayout`]; this module
//! never looks at the terminal.

use ratatui::layout::Rect;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The suburb text field.
    SuburbField,
    /// A match row in the dropdown, by index.
    DropdownItem(usize),
    /// Dropdown border or padding: inside the dropdown but not on an item.
    DropdownChrome,
    /// The Search button.
    SearchButton,
    /// The close glyph of the visible notification.
    NotificationClose,
    /// Anywhere else on the visible notification. Swallows the click.
    Notification,
    /// Anything else.
    Elsewhere,
}

impl ClickTarget {
    /// Whether this click counts as "outside" for the autocomplete dropdown.
    pub fn is_outside_autocomplete(self) -> bool {
        !matches!(
            self,
            ClickTarget::SuburbField | ClickTarget::DropdownItem(_) | ClickTarget::DropdownChrome
        )
    }
}

/// Screen regions of the clickable controls from the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitLayout {
    pub field: Rect,
    pub button: Rect,
    /// Dropdown area including borders. `None` while closed.
    pub dropdown: Option<Rect>,
    /// Number of match rows drawn inside the dropdown.
    pub dropdown_items: usize,
    /// Index of the match drawn on the first dropdown row.
    pub dropdown_offset: usize,
    /// Whole toast area, drawn above everything else.
    pub notification: Option<Rect>,
    /// One-cell area of the notification close glyph.
    pub notification_close: Option<Rect>,
}

/// Find the control at `(column, row)`.
///
/// Overlays win over what they cover in draw order: the notification (its
/// close glyph, then its body), then the dropdown, then the field and button
/// beneath.
pub fn hit_test(column: u16, row: u16, layout: &HitLayout) -> ClickTarget {
    if layout
        .notification_close
        .is_some_and(|area| contains(area, column, row))
    {
        return ClickTarget::NotificationClose;
    }

    if layout
        .notification
        .is_some_and(|area| contains(area, column, row))
    {
        return ClickTarget::Notification;
    }

    if let Some(dropdown) = layout.dropdown {
        if contains(dropdown, column, row) {
            return dropdown_target(dropdown, layout, column, row);
        }
    }

    if contains(layout.field, column, row) {
        return ClickTarget::SuburbField;
    }

    if contains(layout.button, column, row) {
        return ClickTarget::SearchButton;
    }

    ClickTarget::Elsewhere
}

fn dropdown_target(area: Rect, layout: &HitLayout, column: u16, row: u16) -> ClickTarget {
    // One-cell border on every side
    let inner_left = area.x.saturating_add(1);
    let inner_right = area.right().saturating_sub(1);
    let inner_top = area.y.saturating_add(1);

    if column < inner_left || column >= inner_right || row < inner_top {
        return ClickTarget::DropdownChrome;
    }

    let visible_row = (row - inner_top) as usize;
    let inner_bottom = area.bottom().saturating_sub(1);
    if visible_row < layout.dropdown_items && row < inner_bottom {
        ClickTarget::DropdownItem(layout.dropdown_offset + visible_row)
    } else {
        ClickTarget::DropdownChrome
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HitLayout {
        HitLayout {
            field: Rect::new(2, 3, 30, 3),
            button: Rect::new(34, 3, 12, 3),
            // Three items: rows 7, 8, 9; borders at rows 6 and 10
            dropdown: Some(Rect::new(2, 6, 30, 5)),
            dropdown_items: 3,
            dropdown_offset: 0,
            notification: Some(Rect::new(50, 0, 22, 2)),
            notification_close: Some(Rect::new(70, 0, 1, 1)),
        }
    }

    #[test]
    fn click_inside_field() {
        assert_eq!(hit_test(5, 4, &layout()), ClickTarget::SuburbField);
    }

    #[test]
    fn click_on_button() {
        assert_eq!(hit_test(40, 4, &layout()), ClickTarget::SearchButton);
    }

    #[test]
    fn click_on_each_item_row() {
        let l = layout();
        assert_eq!(hit_test(10, 7, &l), ClickTarget::DropdownItem(0));
        assert_eq!(hit_test(10, 8, &l), ClickTarget::DropdownItem(1));
        assert_eq!(hit_test(10, 9, &l), ClickTarget::DropdownItem(2));
    }

    #[test]
    fn click_on_dropdown_border_is_chrome() {
        let l = layout();
        assert_eq!(hit_test(10, 6, &l), ClickTarget::DropdownChrome);
        assert_eq!(hit_test(10, 10, &l), ClickTarget::DropdownChrome);
        assert_eq!(hit_test(2, 8, &l), ClickTarget::DropdownChrome);
        assert_eq!(hit_test(31, 8, &l), ClickTarget::DropdownChrome);
    }

    #[test]
    fn click_below_dropdown_is_elsewhere() {
        assert_eq!(hit_test(10, 11, &layout()), ClickTarget::Elsewhere);
    }

    #[test]
    fn closed_dropdown_area_is_not_hit() {
        let l = HitLayout {
            dropdown: None,
            dropdown_items: 0,
            ..layout()
        };
        assert_eq!(hit_test(10, 8, &l), ClickTarget::Elsewhere);
    }

    #[test]
    fn notification_close_glyph() {
        assert_eq!(hit_test(70, 0, &layout()), ClickTarget::NotificationClose);
        assert_eq!(hit_test(69, 0, &layout()), ClickTarget::Notification);
    }

    #[test]
    fn notification_body_covers_what_is_beneath() {
        // Toast drawn over the field and button
        let l = HitLayout {
            notification: Some(Rect::new(20, 2, 30, 4)),
            notification_close: Some(Rect::new(48, 2, 1, 1)),
            ..layout()
        };
        assert_eq!(hit_test(25, 4, &l), ClickTarget::Notification);
        assert_eq!(hit_test(40, 4, &l), ClickTarget::Notification);
        assert_eq!(hit_test(5, 4, &l), ClickTarget::SuburbField);
    }

    #[test]
    fn scrolled_dropdown_maps_rows_past_offset() {
        // Six matches, three visible, scrolled to show matches 2..=4
        let l = HitLayout {
            dropdown_items: 3,
            dropdown_offset: 2,
            ..layout()
        };
        assert_eq!(hit_test(10, 7, &l), ClickTarget::DropdownItem(2));
        assert_eq!(hit_test(10, 9, &l), ClickTarget::DropdownItem(4));
        assert_eq!(hit_test(10, 10, &l), ClickTarget::DropdownChrome);
    }

    #[test]
    fn outside_classification() {
        assert!(!ClickTarget::SuburbField.is_outside_autocomplete());
        assert!(!ClickTarget::DropdownItem(0).is_outside_autocomplete());
        assert!(!ClickTarget::DropdownChrome.is_outside_autocomplete());
        assert!(ClickTarget::SearchButton.is_outside_autocomplete());
        assert!(ClickTarget::NotificationClose.is_outside_autocomplete());
        assert!(ClickTarget::Notification.is_outside_autocomplete());
        assert!(ClickTarget::Elsewhere.is_outside_autocomplete());
    }
}
