//! The raw transaction records returned by the YNAB API.

use serde::Deserialize;

/// A single transaction from the YNAB transactions endpoint.
///
/// Only the fields that end up in the report are modeled; the API returns many more,
/// which serde ignores. YNAB omits `payee_name`, `memo` and `category_name` for some
/// transactions, and those render as empty cells.
#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Transaction {
    date: String,
    account_name: String,
    #[serde(default)]
    payee_name: Option<String>,
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    category_name: Option<String>,
    /// The amount in milliunits: 1000 milliunits is one unit of currency.
    amount: i64,
    #[serde(default)]
    approved: Option<bool>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: impl Into<String>,
        account_name: impl Into<String>,
        payee_name: Option<String>,
        memo: Option<String>,
        category_name: Option<String>,
        amount: i64,
        approved: Option<bool>,
    ) -> Self {
        Self {
            date: date.into(),
            account_name: account_name.into(),
            payee_name,
            memo,
            category_name,
            amount,
            approved,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn payee_name(&self) -> &str {
        self.payee_name.as_deref().unwrap_or_default()
    }

    pub fn memo(&self) -> &str {
        self.memo.as_deref().unwrap_or_default()
    }

    pub fn category_name(&self) -> &str {
        self.category_name.as_deref().unwrap_or_default()
    }

    /// The amount in milliunits.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// True unless the transaction is explicitly marked unapproved. A transaction
    /// without an approval flag counts as approved.
    pub fn is_approved(&self) -> bool {
        self.approved.unwrap_or(true)
    }
}

/// The envelope returned by `GET /budgets/{budget_id}/transactions`:
/// `{ "data": { "transactions": [...] } }`.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    data: TransactionsData,
}

#[derive(Default, Debug, Clone, Deserialize)]
struct TransactionsData {
    transactions: Vec<Transaction>,
}

impl TransactionsResponse {
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.data.transactions
    }
}
