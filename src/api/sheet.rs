//! Implements the `Sheet` trait using the `sheets::Client` to write to a Google sheet.

use crate::api::{token, Sheet};
use crate::{Result, SyncConfig};
use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use sheets::types::{BatchUpdateValuesRequest, Dimension, ValueInputOption, ValueRange};
use std::path::Path;
use tracing::debug;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Writes to a Google spreadsheet that is resolved by its human-readable name at open
/// time.
pub(super) struct GoogleSheet {
    client: sheets::Client,
    spreadsheet_id: String,
}

impl GoogleSheet {
    /// Authenticates with the service account key at `key_path` and resolves the
    /// configured spreadsheet name to a file id via the Drive API.
    pub(super) async fn open(config: &SyncConfig, key_path: &Path) -> Result<Self> {
        let access_token = token::access_token(key_path).await?;
        let spreadsheet_id =
            find_spreadsheet_id(&access_token, config.spreadsheet_name()).await?;
        debug!(
            "Resolved spreadsheet '{}' to id {spreadsheet_id}",
            config.spreadsheet_name()
        );

        // The sheets crate requires client_id, client_secret, and redirect_uri, but
        // API calls only need the access token.
        let client = sheets::Client::new(
            String::new(),
            String::new(),
            String::new(),
            access_token,
            String::new(),
        );
        Ok(Self {
            client,
            spreadsheet_id,
        })
    }
}

#[async_trait::async_trait]
impl Sheet for GoogleSheet {
    async fn write(
        &mut self,
        worksheet: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> Result<()> {
        let request = BatchUpdateValuesRequest {
            data: vec![ValueRange {
                major_dimension: Some(Dimension::Rows),
                range: format!("'{worksheet}'!{range}"),
                values,
            }],
            include_values_in_response: Some(false),
            response_date_time_render_option: None,
            response_value_render_option: None,
            value_input_option: Some(ValueInputOption::UserEntered),
        };

        self.client
            .spreadsheets()
            .values_batch_update(&self.spreadsheet_id, &request)
            .await
            .map_err(|e| anyhow!("Google Sheets API error: {e}"))
            .with_context(|| format!("Failed to write to worksheet '{worksheet}'"))?;
        Ok(())
    }
}

/// Finds the file id of the spreadsheet named `name` using the Google Drive API:
/// `GET https://www.googleapis.com/drive/v3/files?q=...`.
async fn find_spreadsheet_id(access_token: &str, name: &str) -> Result<String> {
    let query =
        format!("name = '{name}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false");

    let client = reqwest::Client::new();
    let response = client
        .get(DRIVE_FILES_URL)
        .bearer_auth(access_token)
        .query(&[("q", query.as_str()), ("fields", "files(id, name)")])
        .send()
        .await
        .context("Failed to send the file lookup request to the Google Drive API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        bail!("Google Drive file lookup failed with status {status}: {body}");
    }

    let list: FileList = response
        .json()
        .await
        .context("Failed to parse the Google Drive API response")?;

    let file = list
        .files
        .into_iter()
        .next()
        .with_context(|| format!("No spreadsheet named '{name}' was found"))?;
    Ok(file.id)
}

/// The subset of the Drive `files` list response we care about.
#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_drive_file_list() {
        let json = r#"{
            "kind": "drive#fileList",
            "files": [
                {"id": "1a7Km9FxQwRbPt82JvN4LzYpH5OcGnWsT6iDuE3VhMjX", "name": "Budget 2021"}
            ]
        }"#;
        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.files[0].id, "1a7Km9FxQwRbPt82JvN4LzYpH5OcGnWsT6iDuE3VhMjX");
    }

    #[test]
    fn deserialize_empty_drive_file_list() {
        let list: FileList = serde_json::from_str(r#"{"kind": "drive#fileList"}"#).unwrap();
        assert!(list.files.is_empty());
    }
}
