use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use phonebook::cli::Cli;
use phonebook::directory::HttpDirectoryClient;
use phonebook::headless::{self, PromptConfirm};
use phonebook::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "phonebook failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.load_config()?;
    let client = HttpDirectoryClient::new(&config.server).context("failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let Some(command) = &cli.command else {
        phonebook::ui::run(&config, Arc::new(client), runtime.handle().clone())
            .context("terminal UI failed")?;
        return Ok(true);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if command.assume_yes() {
        runtime.block_on(headless::run(
            command,
            &config,
            &client,
            &mut |_: &str| true,
            &mut out,
        ))
    } else {
        let mut confirm = PromptConfirm::stdin();
        runtime.block_on(headless::run(command, &config, &client, &mut confirm, &mut out))
    }
}
