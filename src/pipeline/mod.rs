//! End-to-end resolution run: scan, authenticate, resolve.

use anyhow::{Context, Result};
use tracing::debug;

use crate::auth::establish_session;
use crate::config::Config;
use crate::secrets::{resolve_all, scan_process_env, scan_vars, ResolvedSecret, SecretReference};
use crate::vault::VaultClient;

/// Resolve the given references and return them in order.
///
/// Any transport failure aborts the run with an error.
pub async fn resolve_references(
    config: &Config,
    refs: &[SecretReference],
) -> Result<Vec<ResolvedSecret>> {
    let client = VaultClient::new(&config.vault_addr)?;

    let session = establish_session(config, &client)
        .await
        .context("Vault login failed")?;

    let resolved = resolve_all(&client, &session, refs)
        .await
        .context("Secret lookup failed")?;

    Ok(resolved)
}

/// Resolve every prefixed entry of an environment snapshot.
pub async fn resolve_vars<I, K, V>(config: &Config, vars: I) -> Result<Vec<ResolvedSecret>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let refs = scan_vars(vars, &config.prefix);
    resolve_references(config, &refs).await
}

/// Run against the process environment.
pub async fn run(config: &Config) -> Result<Vec<ResolvedSecret>> {
    let refs = scan_process_env(&config.prefix);
    debug!("Resolving {} reference(s) from {}", refs.len(), config.vault_addr);

    resolve_references(config, &refs).await
}
