//! Application state and the add/update reconciliation flow.
//!
//! [`Phonebook`] owns every piece of mutable state. Its operations never
//! touch the network; they return [`Effect`]s that a runtime executes and
//! feeds back as [`Event`]s.
//!
//! ```text
//! user input ──→ Phonebook ──→ Effect ──→ execute(client) ──→ Event
//!                    ↑                                          │
//!                    └──────────────────────────────────────────┘
//! ```

mod confirm;
mod effect;
mod notification;
mod state;
mod view;

pub use confirm::Confirm;
pub use effect::{execute, settle, Effect, Event, Request};
pub use notification::{Notification, NotificationKind, NotificationState};
pub use state::{Draft, Phonebook};
pub use view::{filter_entries, View};
