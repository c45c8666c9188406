//! Fixed, process-wide settings for a sync run.
//!
//! The `SyncConfig` object is constructed once in `main` and passed to each component
//! instead of being read from module-level globals. The defaults match the spreadsheet
//! and YNAB budget this tool reports on.

const YNAB_BASE_URL: &str = "https://api.youneedabudget.com/v1";
const YNAB_SINCE_DATE: &str = "2021-01-01";
const YNAB_FETCH_ATTEMPTS: u32 = 3;
const YNAB_APPROVED_ONLY: bool = true;
const SPREADSHEET_NAME: &str = "Budget 2021";
const WORKSHEET_NAME: &str = "YNAB-Transactions";
const WRITE_RANGE: &str = "A:Z";

/// The settings that control where transactions are fetched from and where the report
/// is written. Immutable after construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SyncConfig {
    base_url: String,
    since_date: String,
    fetch_attempts: u32,
    approved_only: bool,
    spreadsheet_name: String,
    worksheet_name: String,
    write_range: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: YNAB_BASE_URL.to_string(),
            since_date: YNAB_SINCE_DATE.to_string(),
            fetch_attempts: YNAB_FETCH_ATTEMPTS,
            approved_only: YNAB_APPROVED_ONLY,
            spreadsheet_name: SPREADSHEET_NAME.to_string(),
            worksheet_name: WORKSHEET_NAME.to_string(),
            write_range: WRITE_RANGE.to_string(),
        }
    }
}

impl SyncConfig {
    pub fn new(
        base_url: impl Into<String>,
        since_date: impl Into<String>,
        fetch_attempts: u32,
        approved_only: bool,
        spreadsheet_name: impl Into<String>,
        worksheet_name: impl Into<String>,
        write_range: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            since_date: since_date.into(),
            fetch_attempts,
            approved_only,
            spreadsheet_name: spreadsheet_name.into(),
            worksheet_name: worksheet_name.into(),
            write_range: write_range.into(),
        }
    }

    /// The base URL of the YNAB REST API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The earliest transaction date to include, as `YYYY-MM-DD`.
    pub fn since_date(&self) -> &str {
        &self.since_date
    }

    /// How many times a transaction fetch is attempted before giving up.
    pub fn fetch_attempts(&self) -> u32 {
        self.fetch_attempts
    }

    /// When true, transactions explicitly marked unapproved are left out of the report.
    pub fn approved_only(&self) -> bool {
        self.approved_only
    }

    /// The human-readable name of the target Google spreadsheet.
    pub fn spreadsheet_name(&self) -> &str {
        &self.spreadsheet_name
    }

    /// The name of the worksheet (tab) that holds the transaction report.
    pub fn worksheet_name(&self) -> &str {
        &self.worksheet_name
    }

    /// The cell range that the report overwrites, e.g. `A:Z`.
    pub fn write_range(&self) -> &str {
        &self.write_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SyncConfig::default();
        assert_eq!(config.base_url(), "https://api.youneedabudget.com/v1");
        assert_eq!(config.since_date(), "2021-01-01");
        assert_eq!(config.fetch_attempts(), 3);
        assert!(config.approved_only());
        assert_eq!(config.spreadsheet_name(), "Budget 2021");
        assert_eq!(config.worksheet_name(), "YNAB-Transactions");
        assert_eq!(config.write_range(), "A:Z");
    }

    #[test]
    fn custom_config_values() {
        let config = SyncConfig::new(
            "http://localhost:8080/v1",
            "2024-06-01",
            1,
            false,
            "Scratch",
            "Tab",
            "A:F",
        );
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
        assert_eq!(config.fetch_attempts(), 1);
        assert!(!config.approved_only());
        assert_eq!(config.write_range(), "A:F");
    }
}
