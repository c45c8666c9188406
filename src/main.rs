use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use ynab_sync::args::Args;
use ynab_sync::{commands, Credentials, Mode, Result, SyncConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logger(args.log_level(), args.log_file()) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!(
        "Log level set to {}",
        args.log_level().to_string().to_lowercase()
    );

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = SyncConfig::default();

    // This allows for testing the program without hitting the Google APIs. When
    // YNAB_SYNC_IN_TEST_MODE is set and non-zero in length, then the mode will be
    // Mode::Test, otherwise it will be Mode::Google.
    let mode = Mode::from_env();

    let credentials = Credentials::load(args.gsheet_key(), args.ynab_file()).await?;
    commands::sync(&config, &credentials, mode).await?.print();
    Ok(())
}

/// Initializes the tracing subscriber. Logs go to standard output and, when a log file
/// is given, are appended to that file as well.
fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Unable to open the log file at {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stdout.and(Arc::new(file)))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stdout)
                .init();
        }
    }
    Ok(())
}
