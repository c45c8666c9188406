//! Clients for the two remote services: the YNAB REST API and Google Sheets.

mod sheet;
mod test_sheet;
mod token;
mod ynab;

use crate::model::Transaction;
use crate::{Credentials, Result, SyncConfig};
use serde::{Deserialize, Serialize};

pub(crate) use test_sheet::TestSheet;
pub(crate) use ynab::{fetch_transactions, YnabApi};

// OAuth scopes required for the Google API calls. `drive.readonly` is needed for the
// name-based spreadsheet lookup against the Drive API.
const OAUTH_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.readonly",
];

/// Fetches raw transactions from a budgeting service.
#[async_trait::async_trait]
pub(crate) trait BudgetApi {
    /// One fetch attempt for all transactions since the configured start date.
    async fn transactions(&self) -> Result<Vec<Transaction>>;
}

/// Writes rows into a worksheet of one spreadsheet.
#[async_trait::async_trait]
pub(crate) trait Sheet {
    /// Overwrites `range` of `worksheet` with `values` in a single call.
    async fn write(
        &mut self,
        worksheet: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> Result<()>;
}

/// Chooses between the real Google Sheets client and the in-memory test client. This
/// allows running the program top-to-bottom without hitting the Google APIs: when
/// `YNAB_SYNC_IN_TEST_MODE` is set and non-zero in length, the mode is `Test`,
/// otherwise it is `Google`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Google,
    Test,
}

serde_plain::derive_display_from_serialize!(Mode);
serde_plain::derive_fromstr_from_deserialize!(Mode);

impl Mode {
    pub fn from_env() -> Self {
        match std::env::var("YNAB_SYNC_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Google,
        }
    }
}

/// Creates the `Sheet` implementation appropriate for `mode`.
pub(crate) async fn sheet(
    config: &SyncConfig,
    credentials: &Credentials,
    mode: Mode,
) -> Result<Box<dyn Sheet + Send>> {
    match mode {
        Mode::Google => Ok(Box::new(
            sheet::GoogleSheet::open(config, credentials.gsheet_key()).await?,
        )),
        Mode::Test => Ok(Box::new(TestSheet::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display_and_parse() {
        assert_eq!(Mode::Google.to_string(), "google");
        assert_eq!(Mode::Test.to_string(), "test");
        assert_eq!("test".parse::<Mode>().unwrap(), Mode::Test);
    }
}
