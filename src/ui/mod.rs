//! Terminal front end.

pub mod app;
pub mod confirm;
pub mod dispatch;
pub mod events;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
