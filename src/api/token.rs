//! Service account authentication for the Google APIs.
//!
//! The sync authenticates as a Google service account using the downloaded JSON key
//! file; `yup-oauth2` signs the JWT and exchanges it for a short-lived access token.

use crate::api::OAUTH_SCOPES;
use crate::Result;
use anyhow::Context;
use std::path::Path;
use tracing::debug;

/// Obtains an access token for [`OAUTH_SCOPES`] using the service account key file at
/// `key_path`.
pub(super) async fn access_token(key_path: &Path) -> Result<String> {
    let key = yup_oauth2::read_service_account_key(key_path)
        .await
        .with_context(|| {
            format!(
                "Failed to read the service account key at {}",
                key_path.display()
            )
        })?;

    let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .context("Failed to create the service account authenticator")?;

    let token = auth
        .token(OAUTH_SCOPES)
        .await
        .context("Failed to obtain a Google access token")?;
    let access_token = token
        .token()
        .context("Google returned an empty access token")?;

    debug!("Obtained a Google access token");
    Ok(access_token.to_string())
}
