/// Default configuration constants used across the system.

/// Default Vault address.
pub const DEFAULT_VAULT_ADDR: &str = "http://localhost:8200";

/// Default Kubernetes auth method mount.
pub const DEFAULT_AUTH_MOUNT: &str = "kubernetes";

/// Environment prefix marking secret references. Overridable at build time
/// through `VAULTENV_PREFIX`.
pub const DEFAULT_ENV_PREFIX: &str = match option_env!("VAULTENV_PREFIX") {
    Some(prefix) => prefix,
    None => "SECRET_",
};
