use crate::directory::Entry;

use super::notification::Notification;
use super::state::Draft;

/// Everything the presentation layer needs, detached from the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub banner: Option<Notification>,
    pub filter: String,
    pub draft: Draft,
    /// Entries matching the filter, in directory order.
    pub rows: Vec<Entry>,
    pub submitting: bool,
}

/// Entries whose name contains `filter`, ignoring case.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &str) -> Vec<&'a Entry> {
    let needle = filter.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
