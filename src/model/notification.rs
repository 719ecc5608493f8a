//! Notification severity.

/// Kind of toast notification. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    /// Short label shown in the toast title.
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Info => "Info",
            NotificationKind::Success => "Success",
            NotificationKind::Warning => "Warning",
        }
    }

    /// Success toasts use the gold accent; everything else uses navy.
    pub fn uses_accent(self) -> bool {
        matches!(self, NotificationKind::Success)
    }
}
