//! Session acquisition.
//!
//! Exchanges a Kubernetes service-account JWT for a Vault token, or takes a
//! pre-issued token as-is. Failures other than transport are soft: the run
//! continues with whatever token came back, possibly empty.

use crate::config::Config;
use crate::secrets::types::{Credential, Session};
use crate::vault::{TransportError, VaultClient};
use reqwest::StatusCode;
use tracing::{debug, error, warn};

/// Perform a single login exchange. No retry.
pub async fn authenticate(
    client: &VaultClient,
    credential: &Credential,
    mount: &str,
) -> Result<Session, TransportError> {
    debug!("Logging in to Vault: {}", client.base_url());

    let outcome = client.login(credential, mount).await?;

    if outcome.status != StatusCode::OK {
        error!("Error occurred: {}", outcome.body);
    } else if outcome.client_token.is_empty() {
        warn!("Vault login returned no client token");
    } else {
        debug!("Vault login succeeded");
    }

    Ok(Session::new(outcome.client_token))
}

/// Use the configured token when present, otherwise log in.
pub async fn establish_session(
    config: &Config,
    client: &VaultClient,
) -> Result<Session, TransportError> {
    match config.vault_token.as_deref() {
        Some(token) if !token.is_empty() => {
            debug!("Using pre-issued Vault token");
            Ok(Session::new(token))
        }
        _ => authenticate(client, &config.credential, &config.auth_mount).await,
    }
}
