//! Model-View-Intent (MVI) primitives for UI-only state.
//!
//! Domain state lives in [`Phonebook`](crate::phonebook::Phonebook); these
//! traits cover the purely visual state around it (focus, selection).
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
