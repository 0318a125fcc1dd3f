use super::Config;
use tracing::warn;

/// Validation errors for configuration.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a configuration object.
///
/// Missing credentials only warn; the run proceeds with empty values.
pub fn validate_config(config: &Config) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.vault_addr) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ConfigValidationError {
            path: "vault_addr".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ConfigValidationError {
            path: "vault_addr".to_string(),
            message: format!("Invalid Vault address '{}': {e}", config.vault_addr),
        }),
    }

    if config.prefix.is_empty() {
        errors.push(ConfigValidationError {
            path: "prefix".to_string(),
            message: "Prefix must not be empty".to_string(),
        });
    }

    if config.auth_mount.trim_matches('/').is_empty() {
        errors.push(ConfigValidationError {
            path: "auth_mount".to_string(),
            message: "Auth mount must not be empty".to_string(),
        });
    }

    if !config.has_vault_token() {
        if config.credential.workload_token.is_empty() {
            warn!("No Vault token and no Kubernetes token configured");
        }
        if config.credential.role.is_empty() {
            warn!("No Vault Kubernetes role configured");
        }
    }

    errors
}
