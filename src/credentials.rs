//! Loading of the two credential artifacts the sync needs.
//!
//! The Google service account key file is opaque to us and is forwarded by path to the
//! Google authentication call. The YNAB file is a JSON object holding the personal
//! access token and the budget id.

use crate::{utils, Result};
use anyhow::{bail, Context};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// JSON key for the YNAB personal access token.
const YNAB_TOKEN_KEY: &str = "YNAB_TOKEN";

/// JSON key for the YNAB budget id.
const YNAB_BUDGET_ID_KEY: &str = "YNAB_BUDGET";

/// The credentials for both remote services. Both files are validated at load time;
/// the accessors cannot fail. No mutation after construction.
#[derive(Clone)]
pub struct Credentials {
    gsheet_key: PathBuf,
    ynab_token: String,
    ynab_budget: String,
}

impl Credentials {
    /// Loads credentials from the two files.
    ///
    /// # Errors
    /// - Returns an error if either file does not exist.
    /// - Returns an error if the YNAB file is not a JSON object or lacks one of the
    ///   required string keys.
    pub async fn load(gsheet_key: impl Into<PathBuf>, ynab_file: &Path) -> Result<Self> {
        let gsheet_key = gsheet_key.into();
        if !gsheet_key.is_file() {
            bail!(
                "The Google service account key file is missing '{}'",
                gsheet_key.display()
            )
        }
        if !ynab_file.is_file() {
            bail!(
                "The YNAB credentials file is missing '{}'",
                ynab_file.display()
            )
        }

        let value: Value = utils::deserialize(ynab_file).await?;
        let object = value.as_object().with_context(|| {
            format!("Expected a JSON object in '{}'", ynab_file.display())
        })?;
        let ynab_token = require_string(object, YNAB_TOKEN_KEY, ynab_file)?;
        let ynab_budget = require_string(object, YNAB_BUDGET_ID_KEY, ynab_file)?;

        Ok(Self {
            gsheet_key,
            ynab_token,
            ynab_budget,
        })
    }

    /// The path to the Google service account key file.
    pub fn gsheet_key(&self) -> &Path {
        &self.gsheet_key
    }

    /// The YNAB personal access token.
    pub fn ynab_token(&self) -> &str {
        &self.ynab_token
    }

    /// The id of the YNAB budget to read transactions from.
    pub fn ynab_budget(&self) -> &str {
        &self.ynab_budget
    }
}

// The access token is a secret and must not end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gsheet_key", &self.gsheet_key)
            .field("ynab_token", &"<redacted>")
            .field("ynab_budget", &self.ynab_budget)
            .finish()
    }
}

/// Looks up a required string value in the credentials object.
fn require_string(object: &Map<String, Value>, key: &str, path: &Path) -> Result<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .with_context(|| {
            format!(
                "The YNAB credentials file '{}' is missing the string key '{key}'",
                path.display()
            )
        })
}
