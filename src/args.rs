//! These structs provide the CLI interface for the ynab-sync CLI.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// ynab-sync: export YNAB transactions into a Google Sheet.
///
/// The purpose of this program is to download your financial transactions from YNAB
/// (see https://ynab.com) and write them into the transactions worksheet of a Google
/// spreadsheet, where you can build whatever reporting you like on top of them.
///
/// You will need two credential files: a Google service account key with access to the
/// spreadsheet, and a JSON file holding your YNAB personal access token and budget id
/// under the keys "YNAB_TOKEN" and "YNAB_BUDGET".
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The path to the Google service account key file.
    #[arg(long)]
    gsheet_key: PathBuf,

    /// The path to the YNAB credentials JSON file. It must be a JSON object with the
    /// string keys "YNAB_TOKEN" and "YNAB_BUDGET".
    #[arg(long)]
    ynab_file: PathBuf,

    /// A file to append logs to, in addition to standard output. Default: none.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for
    /// instructions.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn new(
        gsheet_key: impl Into<PathBuf>,
        ynab_file: impl Into<PathBuf>,
        log_file: Option<PathBuf>,
        log_level: LevelFilter,
    ) -> Self {
        Self {
            gsheet_key: gsheet_key.into(),
            ynab_file: ynab_file.into(),
            log_file,
            log_level,
        }
    }

    pub fn gsheet_key(&self) -> &Path {
        &self.gsheet_key
    }

    pub fn ynab_file(&self) -> &Path {
        &self.ynab_file
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
