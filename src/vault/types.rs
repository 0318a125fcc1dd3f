//! Vault wire types.
//!
//! Every field defaults so partial or unexpected bodies still decode.

use serde::{Deserialize, Serialize};

use crate::secrets::types::BackendRecord;

/// Body of `POST /v1/auth/<mount>/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub jwt: &'a str,
    pub role: &'a str,
}

/// `auth` block of a login response. Only the token is read; other
/// fields vary by auth method and are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth: AuthInfo,
}

/// Response of `GET /v1/<mount>/data/<subpath>`. Only `data` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: BackendRecord,
}

/// Vault sends `null` for absent blocks (`"auth": null` on secret reads).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
