//! The sync command: fetch transactions from YNAB, format them, and overwrite the
//! transactions worksheet of the configured spreadsheet.

use crate::api::{fetch_transactions, BudgetApi, Mode, Sheet, YnabApi};
use crate::commands::Out;
use crate::{Credentials, Report, Result, SyncConfig};
use anyhow::Context;
use serde::Serialize;
use tracing::debug;

/// What a sync run did, for the command output.
#[derive(Debug, Clone, Serialize)]
pub struct SyncSummary {
    /// How many raw transactions the YNAB API returned.
    pub fetched: usize,
    /// How many rows were written, header included.
    pub written_rows: usize,
    /// The worksheet the report was written to.
    pub worksheet: String,
    /// The report generation time written into the header marker cell.
    pub generated_at: String,
}

/// Runs one sync pass: Loader output (`credentials`) in, spreadsheet write out. The
/// steps are strictly sequential: fetch, format, write.
pub async fn sync(
    config: &SyncConfig,
    credentials: &Credentials,
    mode: Mode,
) -> Result<Out<SyncSummary>> {
    debug!("Running sync in {mode} mode");
    let api = YnabApi::new(config, credentials);
    let mut sheet = crate::api::sheet(config, credentials, mode).await?;
    sync_with(config, &api, sheet.as_mut()).await
}

/// The injectable inner sync used by [`sync`] and by tests.
pub(crate) async fn sync_with(
    config: &SyncConfig,
    api: &(dyn BudgetApi + Sync),
    sheet: &mut (dyn Sheet + Send),
) -> Result<Out<SyncSummary>> {
    let raw_transactions = fetch_transactions(api, config.fetch_attempts()).await?;
    debug!("Fetched {} raw transactions", raw_transactions.len());

    let report = Report::build(config, &raw_transactions);
    let values = report.to_sheet_values();
    let written_rows = values.len();

    sheet
        .write(config.worksheet_name(), config.write_range(), values)
        .await
        .with_context(|| {
            format!(
                "Failed to write the report to worksheet '{}'",
                config.worksheet_name()
            )
        })?;

    let summary = SyncSummary {
        fetched: raw_transactions.len(),
        written_rows,
        worksheet: config.worksheet_name().to_string(),
        generated_at: report.generated_at().to_string(),
    };
    Ok(Out::new(
        format!(
            "Wrote {written_rows} rows ({} of {} transactions) to '{}'",
            report.rows().len(),
            summary.fetched,
            summary.worksheet
        ),
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TestSheet;
    use crate::model::Transaction;

    /// A `BudgetApi` that always returns the same transactions.
    struct FixedApi {
        transactions: Vec<Transaction>,
    }

    #[async_trait::async_trait]
    impl BudgetApi for FixedApi {
        async fn transactions(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.clone())
        }
    }

    fn transaction(date: &str, amount: i64, approved: Option<bool>) -> Transaction {
        Transaction::new(
            date,
            "Checking",
            Some("Store".to_string()),
            Some("m".to_string()),
            Some("Food".to_string()),
            amount,
            approved,
        )
    }

    #[tokio::test]
    async fn sync_writes_header_plus_approved_rows_to_the_configured_range() {
        let config = SyncConfig::default();
        let api = FixedApi {
            transactions: vec![
                transaction("2024-01-01", -12340, Some(true)),
                transaction("2024-01-02", -5000, Some(true)),
                transaction("2024-01-03", -990, Some(false)),
            ],
        };
        let mut sheet = TestSheet::default();

        let out = sync_with(&config, &api, &mut sheet).await.unwrap();

        assert_eq!(sheet.writes().len(), 1);
        let write = &sheet.writes()[0];
        assert_eq!(write.worksheet, "YNAB-Transactions");
        assert_eq!(write.range, "A:Z");
        // Header plus the two approved transactions; the unapproved one is dropped.
        assert_eq!(write.values.len(), 3);
        assert_eq!(write.values[1][0], "2024-01-01");
        assert_eq!(write.values[2][5], "-5");

        let summary = out.structure().unwrap();
        assert_eq!(summary.fetched, 3);
        assert_eq!(summary.written_rows, 3);
        assert_eq!(summary.worksheet, "YNAB-Transactions");
        assert!(out.message().contains("3 rows"));
    }

    #[tokio::test]
    async fn sync_with_no_transactions_still_writes_the_header() {
        let config = SyncConfig::default();
        let api = FixedApi {
            transactions: Vec::new(),
        };
        let mut sheet = TestSheet::default();

        sync_with(&config, &api, &mut sheet).await.unwrap();

        let write = &sheet.writes()[0];
        assert_eq!(write.values.len(), 1);
        assert_eq!(write.values[0].len(), 7); // 6 columns + the time marker cell
    }
}
