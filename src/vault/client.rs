//! Vault HTTP client: Kubernetes login and KV v2 reads.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::error::TransportError;
use super::types::{LoginRequest, LoginResponse, SecretResponse};
use crate::secrets::types::{BackendRecord, Credential, SecretSource};

/// Raw result of a login round-trip. The status is not interpreted here.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub status: StatusCode,
    pub body: String,
    /// `auth.client_token` if the body decoded, else empty.
    pub client_token: String,
}

/// Vault REST API client. Holds one connection pool for the whole run.
#[derive(Debug, Clone)]
pub struct VaultClient {
    http: Client,
    base_url: String,
}

impl VaultClient {
    fn user_agent() -> String {
        format!("vaultenv/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Build a client for `base_url`. No request timeout is configured.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(|source| TransportError::Request {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    /// `POST /v1/auth/<mount>/login` with `{jwt, role}`.
    pub async fn login(
        &self,
        credential: &Credential,
        mount: &str,
    ) -> Result<LoginOutcome, TransportError> {
        let url = self.api_url(&format!("auth/{mount}/login"));
        let body = LoginRequest {
            jwt: &credential.workload_token,
            role: &credential.role,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|source| TransportError::Body { url, source })?;

        let client_token = serde_json::from_str::<LoginResponse>(&body)
            .map(|r| r.auth.client_token)
            .unwrap_or_default();

        Ok(LoginOutcome {
            status,
            body,
            client_token,
        })
    }

    /// `GET /v1/<path>` with `X-Vault-Token`.
    ///
    /// The status code is not checked. A body that does not decode as a
    /// secret response yields an empty record.
    pub async fn read_secret(&self, token: &str, path: &str) -> Result<BackendRecord, TransportError> {
        let url = self.api_url(path);
        let resp = self
            .http
            .get(&url)
            .header("X-Vault-Token", token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|source| TransportError::Body { url, source })?;
        debug!("GET /v1/{path} -> {status}");

        match serde_json::from_str::<SecretResponse>(&body) {
            Ok(r) => Ok(r.data),
            Err(e) => {
                debug!("Response from /v1/{path} is not a secret record: {e}");
                Ok(BackendRecord::default())
            }
        }
    }
}

#[async_trait]
impl SecretSource for VaultClient {
    fn name(&self) -> &str {
        "vault"
    }

    async fn read(&self, token: &str, path: &str) -> Result<BackendRecord, TransportError> {
        self.read_secret(token, path).await
    }
}
