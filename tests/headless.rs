//! One-shot subcommands against an in-memory directory.

mod common;

use common::memory::{MemoryDirectory, CREATE, LIST_ALL};
use common::ScriptedConfirm;
use phonebook::cli::Command;
use phonebook::config::Config;
use phonebook::directory::{DirectoryError, Entry};
use phonebook::headless;

async fn run(
    command: Command,
    directory: &MemoryDirectory,
    confirm: &mut ScriptedConfirm,
) -> (anyhow::Result<bool>, String) {
    let mut out = Vec::new();
    let result = headless::run(&command, &Config::default(), directory, confirm, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

fn sample() -> MemoryDirectory {
    MemoryDirectory::with_entries(vec![
        Entry::new(1, "Arto Hellas", "040-123456"),
        Entry::new(2, "Ada Lovelace", "39-44-5323523"),
        Entry::new(3, "Dan Abramov", "12-43-234345"),
    ])
}

#[tokio::test]
async fn test_list_prints_filtered_rows() {
    let directory = sample();

    let (result, out) = run(
        Command::List {
            filter: Some("A".into()),
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    assert!(result.unwrap());
    assert_eq!(
        out,
        "Arto Hellas 040-123456\nAda Lovelace 39-44-5323523\nDan Abramov 12-43-234345\n"
    );

    let (_, out) = run(
        Command::List {
            filter: Some("lOVe".into()),
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;
    assert_eq!(out, "Ada Lovelace 39-44-5323523\n");
}

#[tokio::test]
async fn test_add_reports_success() {
    let directory = sample();

    let (result, out) = run(
        Command::Add {
            name: "Alice".into(),
            number: "123".into(),
            yes: false,
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    assert!(result.unwrap());
    assert_eq!(out, "Added Alice\n");
    assert_eq!(directory.entries().len(), 4);
}

#[tokio::test]
async fn test_add_existing_name_asks_before_replacing() {
    let directory = sample();
    let mut confirm = ScriptedConfirm::new(&[true]);

    let (result, out) = run(
        Command::Add {
            name: "Ada Lovelace".into(),
            number: "555".into(),
            yes: false,
        },
        &directory,
        &mut confirm,
    )
    .await;

    assert!(result.unwrap());
    assert_eq!(out, "Added Ada Lovelace\n");
    assert_eq!(confirm.prompts.len(), 1);
    assert_eq!(directory.entries()[1], Entry::new(2, "Ada Lovelace", "555"));
}

#[tokio::test]
async fn test_add_declined_changes_nothing() {
    let directory = sample();

    let (result, out) = run(
        Command::Add {
            name: "Ada Lovelace".into(),
            number: "555".into(),
            yes: false,
        },
        &directory,
        &mut ScriptedConfirm::new(&[false]),
    )
    .await;

    assert!(result.unwrap());
    assert_eq!(out, "Cancelled\n");
    assert_eq!(directory.calls(), vec![LIST_ALL]);
}

#[tokio::test]
async fn test_add_blank_name_fails() {
    let directory = sample();

    let (result, out) = run(
        Command::Add {
            name: "   ".into(),
            number: "1".into(),
            yes: true,
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    assert!(!result.unwrap());
    assert_eq!(out, "Nothing to add: name is empty\n");
}

#[tokio::test]
async fn test_add_rejection_is_reported_as_failure() {
    let directory = sample();
    directory.fail_next(CREATE, DirectoryError::Validation("number is invalid".into()));

    let (result, out) = run(
        Command::Add {
            name: "Bob".into(),
            number: "x".into(),
            yes: false,
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    assert!(!result.unwrap());
    assert_eq!(out, "number is invalid\n");
}

#[tokio::test]
async fn test_delete_removes_named_entry() {
    let directory = sample();
    let mut confirm = ScriptedConfirm::new(&[true]);

    let (result, out) = run(
        Command::Delete {
            name: "Dan Abramov".into(),
            yes: false,
        },
        &directory,
        &mut confirm,
    )
    .await;

    assert!(result.unwrap());
    assert_eq!(out, "Deleted Dan Abramov\n");
    assert_eq!(confirm.prompts, vec!["Delete Dan Abramov?"]);
    assert_eq!(directory.entries().len(), 2);
}

#[tokio::test]
async fn test_delete_unknown_name_fails() {
    let directory = sample();

    let (result, out) = run(
        Command::Delete {
            name: "Nobody".into(),
            yes: true,
        },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    assert!(!result.unwrap());
    assert_eq!(out, "No entry named Nobody\n");
}

#[tokio::test]
async fn test_unreachable_directory_is_an_error() {
    let directory = sample();
    directory.fail_next(LIST_ALL, DirectoryError::Network("refused".into()));

    let (result, out) = run(
        Command::List { filter: None },
        &directory,
        &mut ScriptedConfirm::new(&[]),
    )
    .await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("failed to load the phonebook"));
    assert!(out.is_empty());
}
