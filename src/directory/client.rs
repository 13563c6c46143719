use async_trait::async_trait;

use super::error::DirectoryError;
use super::types::{Entry, EntryId, NewEntry};

/// CRUD access to the remote person collection.
///
/// Implementations perform the network call and nothing else: no retries,
/// no caching.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch every entry in server order.
    async fn list_all(&self) -> Result<Vec<Entry>, DirectoryError>;

    /// Create an entry; the returned value carries the server-assigned id.
    async fn create(&self, entry: &NewEntry) -> Result<Entry, DirectoryError>;

    /// Replace the entry stored under `id`.
    async fn update(&self, id: &EntryId, entry: &Entry) -> Result<Entry, DirectoryError>;

    /// Delete the entry stored under `id`.
    async fn remove(&self, id: &EntryId) -> Result<(), DirectoryError>;
}
