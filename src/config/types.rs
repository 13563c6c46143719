use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the person collection lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Scheme, host and port of the backend (e.g. "http://localhost:3001").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection path below the base URL (e.g. "api/persons").
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Transient banner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible, in milliseconds (default: 5000).
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_resource() -> String {
    "api/persons".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_display_ms() -> u64 {
    5000
}

fn default_tick_ms() -> u64 {
    250
}

impl ServerConfig {
    /// Full URL of the person collection, without a trailing slash.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource.trim_matches('/')
        )
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}
