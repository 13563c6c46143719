//! Remote person collection.
//!
//! The [`DirectoryClient`] trait is the only I/O boundary of the
//! application: list, create, update and delete against a single
//! collection keyed by an opaque id. [`HttpDirectoryClient`] talks to a
//! JSON REST backend.

mod client;
mod error;
mod http;
mod types;

pub use client::DirectoryClient;
pub use error::DirectoryError;
pub use http::HttpDirectoryClient;
pub use types::{Entry, EntryId, NewEntry};
