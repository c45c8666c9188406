//! Implements the `BudgetApi` trait against the YNAB REST API.

use crate::api::BudgetApi;
use crate::model::{Transaction, TransactionsResponse};
use crate::{Credentials, Result, SyncConfig};
use anyhow::{anyhow, bail, Context};
use tracing::{debug, error};

/// A client for the YNAB transactions endpoint. One call to
/// [`BudgetApi::transactions`] is one HTTP GET.
pub(crate) struct YnabApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
    budget_id: String,
    since_date: String,
}

impl YnabApi {
    pub(crate) fn new(config: &SyncConfig, credentials: &Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            token: credentials.ynab_token().to_string(),
            budget_id: credentials.ynab_budget().to_string(),
            since_date: config.since_date().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl BudgetApi for YnabApi {
    async fn transactions(&self) -> Result<Vec<Transaction>> {
        let endpoint = format!("{}/budgets/{}/transactions", self.base_url, self.budget_id);
        debug!("Fetching transactions from {endpoint} since {}", self.since_date);

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(&self.token)
            .query(&[("since_date", self.since_date.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send transaction request to {endpoint}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            bail!("Got response {status} when fetching YNAB transactions: {body}");
        }

        let parsed: TransactionsResponse = response
            .json()
            .await
            .context("Failed to parse the YNAB transactions response")?;
        Ok(parsed.into_transactions())
    }
}

/// Performs up to `attempts` fetches and returns the first success or, if every
/// attempt fails, the last error. Failures are logged and retried immediately, with no
/// backoff. A successful attempt's result is returned as-is and is never overwritten
/// by a later attempt.
pub(crate) async fn fetch_transactions(
    api: &(dyn BudgetApi + Sync),
    attempts: u32,
) -> Result<Vec<Transaction>> {
    let mut last_error = None;
    for attempt in 1..=attempts {
        match api.transactions().await {
            Ok(transactions) => {
                debug!("Fetched {} transactions on attempt {attempt}", transactions.len());
                return Ok(transactions);
            }
            Err(e) => {
                error!("Transaction fetch attempt {attempt} of {attempts} failed: {e:#}");
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| anyhow!("No transaction fetch attempts were made")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// A `BudgetApi` that fails every attempt before `succeed_on` and then returns
    /// `transactions`.
    struct FlakyApi {
        succeed_on: u32,
        transactions: Vec<Transaction>,
        calls: AtomicU32,
    }

    impl FlakyApi {
        fn new(succeed_on: u32, transactions: Vec<Transaction>) -> Self {
            Self {
                succeed_on,
                transactions,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl BudgetApi for FlakyApi {
        async fn transactions(&self) -> Result<Vec<Transaction>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call < self.succeed_on {
                bail!("Got response 500 Internal Server Error on call {call}");
            }
            Ok(self.transactions.clone())
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![Transaction::new(
            "2024-01-01",
            "Checking",
            Some("Store".to_string()),
            None,
            Some("Food".to_string()),
            -12340,
            Some(true),
        )]
    }

    #[tokio::test]
    async fn first_success_is_returned_without_further_attempts() {
        let api = FlakyApi::new(1, sample());
        let transactions = fetch_transactions(&api, 3).await.unwrap();
        assert_eq!(transactions, sample());
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn success_on_the_last_attempt_returns_that_list() {
        let api = FlakyApi::new(3, sample());
        let transactions = fetch_transactions(&api, 3).await.unwrap();
        assert_eq!(transactions, sample());
        assert_eq!(api.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn all_failures_return_the_last_error() {
        let api = FlakyApi::new(10, sample());
        let err = fetch_transactions(&api, 3).await.unwrap_err();
        assert!(err.to_string().contains("on call 3"));
        assert_eq!(api.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_attempts_is_an_error() {
        let api = FlakyApi::new(1, sample());
        let err = fetch_transactions(&api, 0).await.unwrap_err();
        assert!(err.to_string().contains("No transaction fetch attempts"));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
