use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store.
///
/// Backends differ on whether ids are numbers or strings; the value is kept
/// exactly as received so it serializes back unchanged. Any JSON number is
/// accepted, including negative and fractional ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        EntryId::Number(value.into())
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId::Text(value.to_string())
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub number: String,
}

impl Entry {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Copy of this entry with a different number, keeping id and name.
    pub fn with_number(&self, number: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            number: number.into(),
        }
    }
}

/// Payload for creating an entry; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub name: String,
    pub number: String,
}
