mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use crate::application::services::ConsoleLauncher;
use crate::application::store::ConfigurationStore;
use crate::infrastructure::config::JsonFileRepository;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::process_runner::TokioProcessRunner;
use crate::presentation::cli::Cli;
use tracing::debug;

/// vconsole: configuration manager and launcher for the iDRAC KVM console
///
/// Keeps machine profiles and the Java runtime path in a JSON file and opens
/// the vendor's Java KVM client for a selected machine, blocking until the
/// console window is closed.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{}", format!("Logging disabled: {}", err).yellow());
    }

    let launcher = TokioProcessRunner::new().create_launcher();

    if let Err(err) = run(&cli, &launcher).await {
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, launcher: &ConsoleLauncher) -> Result<()> {
    let repository = JsonFileRepository::new(&cli.config);
    debug!(path = %repository.path().display(), "Using configuration file");
    let mut store = ConfigurationStore::load(Box::new(repository))?;
    cli.run(&mut store, launcher).await
}
