//! One-shot subcommands driving the same controller as the UI.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::cli::Command;
use crate::config::Config;
use crate::directory::DirectoryClient;
use crate::phonebook::{execute, settle, Confirm, Event, Phonebook, Request};

/// [`Confirm`] that asks on a line-oriented stream.
///
/// Only `y` or `yes` (any case) count as agreement; EOF and read errors
/// decline.
pub struct PromptConfirm<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stderr> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.prompt, "{message} [y/N] ")
            .and_then(|_| self.prompt.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Run `command` to completion and write its report to `out`.
///
/// Returns `Ok(false)` when the command ran but did not succeed (failure
/// notification, unknown name, empty name).
pub async fn run<C>(
    command: &Command,
    config: &Config,
    client: &C,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<bool>
where
    C: DirectoryClient + ?Sized,
{
    let mut phonebook = Phonebook::new(config.notification.display_duration());
    load(&mut phonebook, client).await?;

    match command {
        Command::List { filter } => {
            if let Some(filter) = filter {
                phonebook.set_filter(filter);
            }
            for entry in phonebook.visible_entries() {
                writeln!(out, "{} {}", entry.name, entry.number)?;
            }
            Ok(true)
        }
        Command::Add { name, number, .. } => {
            phonebook.set_name(name.as_str());
            phonebook.set_number(number.as_str());
            let effects = phonebook.submit(confirm);
            if effects.is_empty() {
                if name.trim().is_empty() {
                    writeln!(out, "Nothing to add: name is empty")?;
                    return Ok(false);
                }
                writeln!(out, "Cancelled")?;
                return Ok(true);
            }

            settle(&mut phonebook, client, effects).await;
            match phonebook.notification() {
                Some(notification) => {
                    writeln!(out, "{}", notification.message)?;
                    Ok(notification.is_success())
                }
                None => Ok(true),
            }
        }
        Command::Delete { name, .. } => {
            let Some(id) = phonebook
                .entries()
                .iter()
                .find(|entry| &entry.name == name)
                .map(|entry| entry.id.clone())
            else {
                writeln!(out, "No entry named {name}")?;
                return Ok(false);
            };

            let effects = phonebook.delete(&id, confirm);
            if effects.is_empty() {
                writeln!(out, "Cancelled")?;
                return Ok(true);
            }
            settle(&mut phonebook, client, effects).await;
            writeln!(out, "Deleted {name}")?;
            Ok(true)
        }
    }
}

/// Initial population. Unlike the UI, a one-shot command cannot continue
/// without the directory, so a failed load is an error here.
async fn load<C>(phonebook: &mut Phonebook, client: &C) -> anyhow::Result<()>
where
    C: DirectoryClient + ?Sized,
{
    match execute(client, Request::LoadAll).await {
        Event::Loaded(Err(err)) => Err(err).context("failed to load the phonebook"),
        event => {
            let follow_up = phonebook.handle(event);
            settle(phonebook, client, follow_up).await;
            Ok(())
        }
    }
}
