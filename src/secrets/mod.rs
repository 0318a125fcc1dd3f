//! Secret references declared in the environment.
//!
//! Scanning turns prefixed variables into references, the locator module
//! maps them to KV v2 paths, and the resolver fetches each one.

pub mod locator;
pub mod resolver;
pub mod scanner;
pub mod types;

pub use locator::{lookup_path, split_locator};
pub use resolver::resolve_all;
pub use scanner::{scan_entries, scan_process_env, scan_vars};
pub use types::{
    BackendRecord, Credential, ResolvedSecret, SecretReference, SecretSource, Session,
};
