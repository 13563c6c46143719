pub mod cli;
pub mod config;
pub mod directory;
pub mod headless;
pub mod logging;
pub mod phonebook;
pub mod ui;
