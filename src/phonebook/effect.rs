use std::collections::VecDeque;
use std::time::Duration;

use crate::directory::{DirectoryClient, DirectoryError, Entry, EntryId, NewEntry};

use super::state::Phonebook;

/// One call against the remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Initial population at startup.
    LoadAll,
    Create(NewEntry),
    Update { id: EntryId, entry: Entry },
    /// Full resynchronisation after an update hit a deleted entry.
    Refresh,
    Remove { id: EntryId },
}

/// Work the controller asks its runtime to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    /// Fire [`Event::NotificationExpired`] with `generation` after `after`.
    ExpireNotification { generation: u64, after: Duration },
}

/// Completion fed back into [`Phonebook::handle`].
#[derive(Debug)]
pub enum Event {
    Loaded(Result<Vec<Entry>, DirectoryError>),
    Created(Result<Entry, DirectoryError>),
    Updated {
        requested: Entry,
        result: Result<Entry, DirectoryError>,
    },
    Refreshed(Result<Vec<Entry>, DirectoryError>),
    Removed {
        id: EntryId,
        result: Result<(), DirectoryError>,
    },
    NotificationExpired { generation: u64 },
}

/// Perform `request` and wrap the outcome as an [`Event`].
pub async fn execute<C>(client: &C, request: Request) -> Event
where
    C: DirectoryClient + ?Sized,
{
    match request {
        Request::LoadAll => Event::Loaded(client.list_all().await),
        Request::Create(entry) => Event::Created(client.create(&entry).await),
        Request::Update { id, entry } => {
            let result = client.update(&id, &entry).await;
            Event::Updated {
                requested: entry,
                result,
            }
        }
        Request::Refresh => Event::Refreshed(client.list_all().await),
        Request::Remove { id } => {
            let result = client.remove(&id).await;
            Event::Removed { id, result }
        }
    }
}

/// Run every request in `effects`, and those they trigger, to completion.
///
/// Requests run one at a time in the order they were emitted. Expiry
/// effects are dropped: nothing waits for a notification to time out.
/// Returns the number of requests performed.
pub async fn settle<C>(phonebook: &mut Phonebook, client: &C, effects: Vec<Effect>) -> usize
where
    C: DirectoryClient + ?Sized,
{
    let mut queue: VecDeque<Effect> = effects.into();
    let mut performed = 0;

    while let Some(effect) = queue.pop_front() {
        let Effect::Request(request) = effect else {
            continue;
        };
        performed += 1;
        let event = execute(client, request).await;
        queue.extend(phonebook.handle(event));
    }

    performed
}
