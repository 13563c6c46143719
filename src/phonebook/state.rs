use std::time::Duration;

use crate::directory::{DirectoryError, Entry, EntryId, NewEntry};

use super::confirm::Confirm;
use super::effect::{Effect, Event, Request};
use super::notification::{Notification, NotificationKind, NotificationState};
use super::view::{filter_entries, View};

/// Add-form input buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub number: String,
}

impl Draft {
    pub fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }
}

/// The application-state controller.
#[derive(Debug, Clone)]
pub struct Phonebook {
    entries: Vec<Entry>,
    draft: Draft,
    filter: String,
    notification: NotificationState,
    notification_ttl: Duration,
    /// Create/update requests emitted but not yet completed.
    submitting: usize,
}

impl Phonebook {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            draft: Draft::default(),
            filter: String::new(),
            notification: NotificationState::default(),
            notification_ttl,
            submitting: 0,
        }
    }

    /// Effects to run once at startup.
    pub fn start(&self) -> Vec<Effect> {
        vec![Effect::Request(Request::LoadAll)]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting > 0
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.draft.number = number.into();
    }

    /// Store the filter lowercased, as typed into the filter box.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_lowercase();
    }

    pub fn visible_entries(&self) -> Vec<&Entry> {
        filter_entries(&self.entries, &self.filter)
    }

    pub fn view(&self) -> View {
        View {
            banner: self.notification.current().cloned(),
            filter: self.filter.clone(),
            draft: self.draft.clone(),
            rows: self.visible_entries().into_iter().cloned().collect(),
            submitting: self.is_submitting(),
        }
    }

    /// Submit the add form.
    ///
    /// An existing name is replaced only after `confirm` agrees; a new name
    /// is created when it has at least one non-whitespace character.
    /// Anything else is a silent no-op.
    pub fn submit(&mut self, confirm: &mut dyn Confirm) -> Vec<Effect> {
        let name = self.draft.name.clone();
        let existing = self.entries.iter().find(|entry| entry.name == name).cloned();

        if let Some(existing) = existing {
            let prompt = format!(
                "{name} is already added to phonebook, replace the old number with a new one?"
            );
            if !confirm.confirm(&prompt) {
                tracing::debug!(name = %name, "replace declined");
                return Vec::new();
            }
            let changed = existing.with_number(self.draft.number.clone());
            self.submitting += 1;
            tracing::info!(id = %existing.id, name = %name, "updating entry");
            return vec![Effect::Request(Request::Update {
                id: existing.id,
                entry: changed,
            })];
        }

        if name.chars().any(|c| !c.is_whitespace()) {
            self.submitting += 1;
            tracing::info!(name = %name, "creating entry");
            return vec![Effect::Request(Request::Create(NewEntry {
                name,
                number: self.draft.number.clone(),
            }))];
        }

        Vec::new()
    }

    /// Delete the entry with `id` after confirmation.
    ///
    /// The entry leaves the local list immediately; the outcome of the
    /// remote delete is only logged.
    pub fn delete(&mut self, id: &EntryId, confirm: &mut dyn Confirm) -> Vec<Effect> {
        let Some(entry) = self.entries.iter().find(|entry| &entry.id == id) else {
            return Vec::new();
        };
        if !confirm.confirm(&format!("Delete {}?", entry.name)) {
            return Vec::new();
        }

        self.entries.retain(|entry| &entry.id != id);
        tracing::info!(id = %id, "deleting entry");
        vec![Effect::Request(Request::Remove { id: id.clone() })]
    }

    /// Apply a completion or timer event.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            Event::Loaded(Ok(entries)) => {
                tracing::info!(count = entries.len(), "directory loaded");
                self.entries = entries;
            }
            Event::Loaded(Err(err)) => {
                tracing::warn!(error = %err, "initial load failed");
            }
            Event::Created(result) => {
                self.finish_submission();
                match result {
                    Ok(entry) => {
                        let message = format!("Added {}", entry.name);
                        self.entries.push(entry);
                        self.draft.clear();
                        self.notify(message, NotificationKind::Success, &mut effects);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "create rejected");
                        self.notify(err.to_string(), NotificationKind::Failure, &mut effects);
                    }
                }
            }
            Event::Updated { requested, result } => {
                self.finish_submission();
                match result {
                    Ok(returned) => {
                        for entry in self.entries.iter_mut() {
                            if entry.name == requested.name {
                                *entry = returned.clone();
                            }
                        }
                        self.draft.clear();
                        self.notify(
                            format!("Added {}", requested.name),
                            NotificationKind::Success,
                            &mut effects,
                        );
                    }
                    Err(DirectoryError::NotFound { id }) => {
                        tracing::warn!(id = %id, name = %requested.name, "entry removed elsewhere, resyncing");
                        effects.push(Effect::Request(Request::Refresh));
                        self.draft.clear();
                        self.notify(
                            format!(
                                "Information of {} has already been removed from server",
                                requested.name
                            ),
                            NotificationKind::Failure,
                            &mut effects,
                        );
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "update failed");
                        self.notify(err.to_string(), NotificationKind::Failure, &mut effects);
                    }
                }
            }
            Event::Refreshed(Ok(entries)) => {
                tracing::info!(count = entries.len(), "directory resynchronised");
                self.entries = entries;
            }
            Event::Refreshed(Err(err)) => {
                tracing::warn!(error = %err, "resync failed");
            }
            Event::Removed { id, result } => match result {
                Ok(()) => tracing::debug!(id = %id, "remote delete done"),
                Err(err) => tracing::warn!(id = %id, error = %err, "remote delete failed"),
            },
            Event::NotificationExpired { generation } => {
                self.notification.expire(generation);
            }
        }

        effects
    }

    fn notify(&mut self, message: String, kind: NotificationKind, effects: &mut Vec<Effect>) {
        let generation = self.notification.show(message, kind);
        effects.push(Effect::ExpireNotification {
            generation,
            after: self.notification_ttl,
        });
    }

    fn finish_submission(&mut self) {
        self.submitting = self.submitting.saturating_sub(1);
    }
}
