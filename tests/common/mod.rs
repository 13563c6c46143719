//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod memory;
pub mod mock_backend;

use phonebook::config::{Config, ServerConfig};
use phonebook::directory::HttpDirectoryClient;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a fresh `config.toml` in a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointing at `base_url` with otherwise default settings.
pub fn config_for(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            base_url: base_url.to_string(),
            resource: "api/persons".to_string(),
            connect_timeout_seconds: 1,
        },
        ..Config::default()
    }
}

pub fn http_client(base_url: &str) -> HttpDirectoryClient {
    HttpDirectoryClient::new(&config_for(base_url).server).expect("Failed to build client")
}

/// Confirm stand-in that answers from a script and records every prompt.
pub struct ScriptedConfirm {
    answers: Vec<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

impl phonebook::phonebook::Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop().expect("unexpected confirmation prompt")
    }
}
