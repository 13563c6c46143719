//! Single transient notification with generation-guarded expiry.

/// Visual flavour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Holds at most one live notification.
///
/// Every [`show`](Self::show) bumps the generation. An expiry only clears
/// the notification when it carries the current generation, so a timer
/// started for an older notification can never hide a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationState {
    /// Replace the current notification and return its generation.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Notification {
            message: message.into(),
            kind,
        });
        self.generation
    }

    /// Clear the notification if `generation` is still the latest one.
    ///
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
