//! Secret reference resolver.
//!
//! Looks up every reference against a [`SecretSource`], one call per
//! reference and in input order, and extracts the requested field.

use super::locator::{has_mount, lookup_path};
use super::types::{ResolvedSecret, SecretReference, SecretSource, Session};
use crate::vault::TransportError;
use tracing::{debug, warn};

/// Resolve all references with the given session.
///
/// The output has the same length and order as `refs`. The first transport
/// failure aborts the whole run; later references are not attempted.
pub async fn resolve_all(
    source: &dyn SecretSource,
    session: &Session,
    refs: &[SecretReference],
) -> Result<Vec<ResolvedSecret>, TransportError> {
    let mut resolved = Vec::with_capacity(refs.len());

    for secret_ref in refs {
        resolved.push(resolve_single_ref(source, session, secret_ref).await?);
    }

    let empty_count = resolved.iter().filter(|s| s.value.is_empty()).count();
    debug!(
        "Secret resolution complete: {} resolved, {empty_count} empty",
        resolved.len() - empty_count
    );

    Ok(resolved)
}

/// Resolve a single reference through the source.
async fn resolve_single_ref(
    source: &dyn SecretSource,
    session: &Session,
    secret_ref: &SecretReference,
) -> Result<ResolvedSecret, TransportError> {
    if !has_mount(&secret_ref.locator) {
        warn!(
            "Secret '{}' has locator '{}' without a mount segment",
            secret_ref.name, secret_ref.locator
        );
    }

    let path = lookup_path(&secret_ref.locator);
    debug!(
        "Resolving '{}' from '{}' via source '{}'",
        secret_ref.name,
        path,
        source.name()
    );

    let record = source.read(session.token(), &path).await?;
    let value = record.field(&secret_ref.name);

    if value.is_empty() {
        warn!(
            "Field '{}' not found at '{}'",
            secret_ref.field_name(),
            path
        );
    }

    Ok(ResolvedSecret {
        name: secret_ref.name.clone(),
        value,
    })
}
