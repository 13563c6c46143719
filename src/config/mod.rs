//! Configuration loading for the phonebook client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, NotificationConfig, ServerConfig, UiConfig};
