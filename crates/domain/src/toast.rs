use crate::notification::NotificationEntry;

/// The single transiently surfaced entry.
///
/// Holds a copy of the entry, so removing the entry from the list does not
/// affect what the toast shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub visible: bool,
    pub entry: Option<NotificationEntry>,
}

impl ToastState {
    pub fn show(&mut self, entry: NotificationEntry) {
        self.visible = true;
        self.entry = Some(entry);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The entry currently shown, if the toast is visible
    pub fn current(&self) -> Option<&NotificationEntry> {
        if self.visible {
            self.entry.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewNotification, NotificationKind};

    fn entry(id: &str) -> NotificationEntry {
        NotificationEntry::new(
            id.into(),
            0,
            NewNotification::new(NotificationKind::Success, "Saved", "Profile saved"),
        )
    }

    #[test]
    fn show_replaces_and_hide_keeps_last_entry() {
        let mut toast = ToastState::default();
        assert!(toast.current().is_none());

        toast.show(entry("1"));
        toast.show(entry("2"));
        assert_eq!(toast.current().map(|e| e.id.as_str()), Some("2"));

        toast.hide();
        assert!(!toast.visible);
        assert!(toast.current().is_none());
        assert!(toast.entry.is_some());
    }
}
