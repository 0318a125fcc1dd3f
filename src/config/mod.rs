mod defaults;
mod validation;

pub use defaults::*;
pub use validation::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::cli::Cli;
use crate::secrets::types::Credential;

/// Run configuration, built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vault_addr: String,
    /// Pre-issued Vault token. Login is skipped when this is non-empty.
    pub vault_token: Option<String>,
    pub credential: Credential,
    pub auth_mount: String,
    pub prefix: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_addr: DEFAULT_VAULT_ADDR.to_string(),
            vault_token: None,
            credential: Credential::default(),
            auth_mount: DEFAULT_AUTH_MOUNT.to_string(),
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Build the configuration from parsed arguments.
    ///
    /// The workload token comes from `--kube-token`, or from
    /// `--kube-token-file` when the former is empty.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let workload_token = match (&cli.kube_token, &cli.kube_token_file) {
            (token, _) if !token.is_empty() => token.clone(),
            (_, Some(path)) => read_token_file(path)?,
            _ => String::new(),
        };

        Ok(Self {
            vault_addr: cli.vault_addr.clone(),
            vault_token: cli.vault_token.clone(),
            credential: Credential {
                workload_token,
                role: cli.role.clone(),
            },
            auth_mount: cli.auth_mount.trim_matches('/').to_string(),
            prefix: cli.prefix.clone(),
            debug: cli.debug,
        })
    }

    pub fn has_vault_token(&self) -> bool {
        self.vault_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Read a service-account token, trimming the trailing newline.
fn read_token_file(path: &Path) -> Result<String> {
    debug!("Reading Kubernetes token from {}", path.display());
    let token = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read Kubernetes token from {}", path.display()))?;
    Ok(token.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vaultenv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.vault_addr, "http://localhost:8200");
        assert_eq!(config.auth_mount, "kubernetes");
        assert_eq!(config.prefix, DEFAULT_ENV_PREFIX);
        assert!(!config.has_vault_token());
    }

    #[test]
    fn builds_from_flags() {
        let cli = parse(&[
            "-a", "https://vault.internal:8200",
            "-t", "eyJ.jwt",
            "-r", "app",
            "-p", "VAULT_",
            "--auth-mount", "/k8s/",
            "-d",
        ]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.vault_addr, "https://vault.internal:8200");
        assert_eq!(config.credential.workload_token, "eyJ.jwt");
        assert_eq!(config.credential.role, "app");
        assert_eq!(config.prefix, "VAULT_");
        assert_eq!(config.auth_mount, "k8s");
        assert!(config.debug);
    }

    #[test]
    fn reads_token_file_when_flag_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "eyJ.from-file").unwrap();
        let path = file.path().to_str().unwrap();

        let config = Config::from_cli(&parse(&["--kube-token-file", path])).unwrap();
        assert_eq!(config.credential.workload_token, "eyJ.from-file");
    }

    #[test]
    fn explicit_token_wins_over_file() {
        let config = Config::from_cli(&parse(&[
            "-t",
            "eyJ.flag",
            "--kube-token-file",
            "/nonexistent/token",
        ]))
        .unwrap();
        assert_eq!(config.credential.workload_token, "eyJ.flag");
    }

    #[test]
    fn unreadable_token_file_is_an_error() {
        let err = Config::from_cli(&parse(&["--kube-token-file", "/nonexistent/token"]))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/token"));
    }

    #[test]
    fn empty_vault_token_does_not_count() {
        let config = Config {
            vault_token: Some(String::new()),
            ..Config::default()
        };
        assert!(!config.has_vault_token());
    }
}
