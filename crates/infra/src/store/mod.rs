use crate::capabilities::NativePermission;
use medtrack_notifier_domain::{EntryId, NotificationEntry, ToastState};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

/// In memory state of the notification engine.
///
/// The entry list, the toast, the seen reminders and the unread counter are
/// all guarded by the same lock so every operation observes and leaves them
/// consistent with each other.
pub struct NotificationStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    /// Newest first
    entries: Vec<NotificationEntry>,
    unread: usize,
    toast: ToastState,
    /// Bumped every time the toast changes so that a superseded auto dismiss
    /// timer can tell it is stale
    toast_generation: u64,
    toast_timer: Option<JoinHandle<()>>,
    /// External reminder ids that have already produced an entry. Never evicted.
    seen_reminders: HashSet<String>,
    native_permission: NativePermission,
    disposed: bool,
}

impl StoreState {
    fn cancel_toast_timer(&mut self) {
        self.toast_generation += 1;
        if let Some(timer) = self.toast_timer.take() {
            timer.abort();
        }
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Prepends the entry to the list and surfaces it as the toast, replacing
    /// the current toast and restarting the auto dismiss timer.
    pub fn add(self: &Arc<Self>, entry: NotificationEntry, toast_timeout: Duration) {
        let mut state = self.state.lock();
        if !entry.is_read() {
            state.unread += 1;
        }
        state.entries.insert(0, entry.clone());

        state.cancel_toast_timer();
        state.toast.show(entry);
        if state.disposed {
            return;
        }

        let generation = state.toast_generation;
        let store = Arc::downgrade(self);
        match Handle::try_current() {
            Ok(runtime) => {
                state.toast_timer = Some(runtime.spawn(async move {
                    tokio::time::sleep(toast_timeout).await;
                    if let Some(store) = store.upgrade() {
                        store.expire_toast(generation);
                    }
                }));
            }
            Err(_) => {
                warn!("No async runtime available, toast will not be dismissed automatically");
            }
        }
    }

    fn expire_toast(&self, generation: u64) {
        let mut state = self.state.lock();
        if state.disposed || state.toast_generation != generation {
            return;
        }
        state.toast.hide();
        state.toast_timer = None;
    }

    pub fn notifications(&self) -> Vec<NotificationEntry> {
        self.state.lock().entries.clone()
    }

    pub fn find(&self, id: &EntryId) -> Option<NotificationEntry> {
        self.state
            .lock()
            .entries
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    pub fn unread_count(&self) -> usize {
        self.state.lock().unread
    }

    /// The entries together with the unread counter, read under one lock
    pub fn snapshot(&self) -> (Vec<NotificationEntry>, usize) {
        let state = self.state.lock();
        (state.entries.clone(), state.unread)
    }

    /// Returns false if there is no entry with the given id
    pub fn mark_as_read(&self, id: &EntryId) -> bool {
        let mut state = self.state.lock();
        let was_unread = match state.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => entry.mark_read(),
            None => return false,
        };
        if was_unread {
            state.unread -= 1;
        }
        true
    }

    pub fn mark_all_as_read(&self) {
        let mut state = self.state.lock();
        for entry in state.entries.iter_mut() {
            entry.mark_read();
        }
        state.unread = 0;
    }

    /// Removes the entry from the list. A toast showing it stays visible.
    pub fn remove(&self, id: &EntryId) -> Option<NotificationEntry> {
        let mut state = self.state.lock();
        let index = state.entries.iter().position(|e| &e.id == id)?;
        let removed = state.entries.remove(index);
        if !removed.is_read() {
            state.unread -= 1;
        }
        Some(removed)
    }

    /// Empties the list, returning how many entries were removed. The toast is
    /// left untouched.
    pub fn clear_all(&self) -> usize {
        let mut state = self.state.lock();
        let removed = state.entries.len();
        state.entries.clear();
        state.unread = 0;
        removed
    }

    pub fn toast(&self) -> ToastState {
        self.state.lock().toast.clone()
    }

    /// Hides the toast and cancels its pending auto dismiss. Returns whether a
    /// toast was visible.
    pub fn dismiss_toast(&self) -> bool {
        let mut state = self.state.lock();
        let was_visible = state.toast.visible;
        state.cancel_toast_timer();
        state.toast.hide();
        was_visible
    }

    /// The user acted on the toast: the entry it shows is marked read if it is
    /// still listed, and the toast is hidden.
    pub fn act_on_toast(&self) -> Option<NotificationEntry> {
        let mut state = self.state.lock();
        let shown = state.toast.current()?.clone();

        let was_unread = state
            .entries
            .iter_mut()
            .find(|e| e.id == shown.id)
            .map(|e| e.mark_read())
            .unwrap_or(false);
        if was_unread {
            state.unread -= 1;
        }

        state.cancel_toast_timer();
        state.toast.hide();
        Some(shown)
    }

    /// Records that the external reminder produced a notification. Returns
    /// false if it had already been recorded.
    pub fn mark_reminder_seen(&self, reminder_id: &str) -> bool {
        self.state
            .lock()
            .seen_reminders
            .insert(reminder_id.to_string())
    }

    pub fn has_seen_reminder(&self, reminder_id: &str) -> bool {
        self.state.lock().seen_reminders.contains(reminder_id)
    }

    pub fn native_permission(&self) -> NativePermission {
        self.state.lock().native_permission
    }

    pub fn set_native_permission(&self, permission: NativePermission) {
        self.state.lock().native_permission = permission;
    }

    /// Cancels the toast timer. No timer fires against this store afterwards.
    pub fn dispose(&self) {
        let mut state = self.state.lock();
        state.disposed = true;
        state.cancel_toast_timer();
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
