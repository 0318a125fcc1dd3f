//! HashiCorp Vault HTTP plumbing.
//!
//! Only two endpoints are used: Kubernetes auth login and KV v2 reads.

pub mod client;
pub mod error;
pub mod types;

pub use client::{LoginOutcome, VaultClient};
pub use error::TransportError;
