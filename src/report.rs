//! Builds the tabular report that gets written to the spreadsheet.

use crate::model::{Amount, Transaction};
use crate::SyncConfig;
use chrono::Local;

/// Display names of the report columns, in output order. This is an immutable template;
/// every report takes a fresh copy as its header.
const COLUMNS: [&str; 6] = ["Date", "Account", "Payee", "Memo", "Category", "Amount"];

/// The formatted transaction table, ready for a spreadsheet write.
///
/// The generation time lives in `generated_at` rather than being spliced into the
/// header, so within the model the header and every data row have the same number of
/// cells. [`Report::to_sheet_values`] appends the `Time Updated` marker to the header
/// at the write boundary, which reproduces the sheet layout the report has always had.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    generated_at: String,
}

impl Report {
    /// Formats `transactions` into the fixed-column table, stamped with the current
    /// local time.
    pub fn build(config: &SyncConfig, transactions: &[Transaction]) -> Self {
        Self::build_at(
            config,
            transactions,
            Local::now().format("%a %b %e %T %Y").to_string(),
        )
    }

    /// Same as [`Report::build`] with the generation time supplied by the caller.
    pub(crate) fn build_at(
        config: &SyncConfig,
        transactions: &[Transaction],
        generated_at: String,
    ) -> Self {
        let header = COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = transactions
            .iter()
            .filter(|t| !config.approved_only() || t.is_approved())
            .map(format_row)
            .collect();
        Self {
            header,
            rows,
            generated_at,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The human-readable local time at which the report was built.
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// The rows that get posted: the header first, with the generation time marker
    /// appended as one extra trailing cell, then the data rows. This makes the header
    /// row one cell longer than every data row, a long-standing quirk of the sheet
    /// layout.
    pub fn to_sheet_values(&self) -> Vec<Vec<String>> {
        let mut header = self.header.clone();
        header.push(format!("Time Updated: {}", self.generated_at));
        let mut values = Vec::with_capacity(self.rows.len() + 1);
        values.push(header);
        values.extend(self.rows.iter().cloned());
        values
    }
}

/// One data row: the fixed source fields, stringified, with the amount converted from
/// milliunits. Column order matches `COLUMNS`.
fn format_row(transaction: &Transaction) -> Vec<String> {
    vec![
        transaction.date().to_string(),
        transaction.account_name().to_string(),
        transaction.payee_name().to_string(),
        transaction.memo().to_string(),
        transaction.category_name().to_string(),
        Amount::from_milliunits(transaction.amount()).to_string(),
    ]
}
