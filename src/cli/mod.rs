use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_AUTH_MOUNT, DEFAULT_ENV_PREFIX, DEFAULT_VAULT_ADDR};

#[derive(Parser, Debug)]
#[command(
    name = "vaultenv",
    version,
    about = "Resolve Vault secrets referenced by environment variables into export lines"
)]
pub struct Cli {
    /// Vault address
    #[arg(short = 'a', long, env = "VAULT_ADDR", default_value = DEFAULT_VAULT_ADDR)]
    pub vault_addr: String,

    /// Vault token; skips Kubernetes login when set
    #[arg(short = 'k', long, env = "VAULT_TOKEN", hide_env_values = true)]
    pub vault_token: Option<String>,

    /// Kubernetes service-account token
    #[arg(short = 't', long, default_value = "", hide_default_value = true)]
    pub kube_token: String,

    /// Read the Kubernetes token from this file when --kube-token is empty
    #[arg(long, value_name = "PATH")]
    pub kube_token_file: Option<PathBuf>,

    /// Vault Kubernetes role
    #[arg(short = 'r', long, env = "VAULT_KUBE_ROLE", default_value = "")]
    pub role: String,

    /// Kubernetes auth method mount
    #[arg(long, default_value = DEFAULT_AUTH_MOUNT)]
    pub auth_mount: String,

    /// Environment variable prefix marking secret references
    #[arg(short = 'p', long, default_value = DEFAULT_ENV_PREFIX)]
    pub prefix: String,

    /// Debug mode
    #[arg(short = 'd', long)]
    pub debug: bool,
}
