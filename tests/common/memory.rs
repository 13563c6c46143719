//! In-memory directory for exercising the controller without HTTP.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use phonebook::directory::{DirectoryClient, DirectoryError, Entry, EntryId, NewEntry};
use std::collections::{HashMap, VecDeque};

/// Operation names used for scripted failures and the call log.
pub const LIST_ALL: &str = "list_all";
pub const CREATE: &str = "create";
pub const UPDATE: &str = "update";
pub const REMOVE: &str = "remove";

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    next_id: u64,
    failures: HashMap<&'static str, VecDeque<DirectoryError>>,
    calls: Vec<String>,
}

/// A store that behaves like the remote collection: assigns numeric ids,
/// answers `NotFound` for unknown ids, and can be told to fail.
#[derive(Default)]
pub struct MemoryDirectory {
    inner: Mutex<Inner>,
}

impl MemoryDirectory {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let next_id = entries
            .iter()
            .filter_map(|entry| match &entry.id {
                EntryId::Number(n) => n.as_u64(),
                EntryId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(Inner {
                entries,
                next_id,
                ..Inner::default()
            }),
        }
    }

    /// Make the next call to `operation` fail with `error`.
    pub fn fail_next(&self, operation: &'static str, error: DirectoryError) {
        self.inner
            .lock()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Remove an entry without going through the client, as another user would.
    pub fn remove_elsewhere(&self, name: &str) {
        self.inner.lock().entries.retain(|entry| entry.name != name);
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.inner.lock().entries.clone()
    }

    /// Calls made so far, e.g. `"update 1"`.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().calls.clone()
    }

    fn begin(&self, operation: &'static str, call: String) -> Result<(), DirectoryError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        match inner
            .failures
            .get_mut(operation)
            .and_then(|queue| queue.pop_front())
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DirectoryClient for MemoryDirectory {
    async fn list_all(&self) -> Result<Vec<Entry>, DirectoryError> {
        self.begin(LIST_ALL, LIST_ALL.to_string())?;
        Ok(self.entries())
    }

    async fn create(&self, entry: &NewEntry) -> Result<Entry, DirectoryError> {
        self.begin(CREATE, format!("{CREATE} {}", entry.name))?;
        let mut inner = self.inner.lock();
        let created = Entry::new(inner.next_id, entry.name.clone(), entry.number.clone());
        inner.next_id += 1;
        inner.entries.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EntryId, entry: &Entry) -> Result<Entry, DirectoryError> {
        self.begin(UPDATE, format!("{UPDATE} {id}"))?;
        let mut inner = self.inner.lock();
        let slot = inner
            .entries
            .iter_mut()
            .find(|existing| &existing.id == id)
            .ok_or_else(|| DirectoryError::NotFound { id: id.clone() })?;
        *slot = entry.clone();
        Ok(entry.clone())
    }

    async fn remove(&self, id: &EntryId) -> Result<(), DirectoryError> {
        self.begin(REMOVE, format!("{REMOVE} {id}"))?;
        let mut inner = self.inner.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| &entry.id != id);
        if inner.entries.len() == before {
            return Err(DirectoryError::NotFound { id: id.clone() });
        }
        Ok(())
    }
}
