//! Core types for the secret resolution pipeline.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use crate::vault::types::null_as_default;
use crate::vault::TransportError;

// ============================================================================
// Reference Types
// ============================================================================

/// A secret declared through a prefixed environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    /// Output variable name (prefix stripped, case preserved).
    pub name: String,
    /// `<mount>/<subpath...>` location of the secret in the backend.
    pub locator: String,
}

impl SecretReference {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }

    /// Key looked up inside the backend record.
    pub fn field_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Final output unit: one per reference, in reference order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub name: String,
    /// Empty when the backend record had no matching field.
    pub value: String,
}

// ============================================================================
// Credentials and Session
// ============================================================================

/// Workload identity exchanged for a backend session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub workload_token: String,
    pub role: String,
}

/// Bearer credential used for every lookup. May be empty after a soft
/// login failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

// ============================================================================
// Backend Record
// ============================================================================

/// Secret payload returned for a single path lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: HashMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BackendRecord {
    /// Value of `name` (lowercased) if it is a JSON string, otherwise `""`.
    pub fn field(&self, name: &str) -> String {
        self.data
            .get(&name.to_lowercase())
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }
}

// ============================================================================
// Source Trait
// ============================================================================

/// Anything that can return a record for a backend path.
///
/// Only transport failures are errors; everything else degrades to an
/// empty record.
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Display name for logging.
    fn name(&self) -> &str;

    async fn read(&self, token: &str, path: &str) -> Result<BackendRecord, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(data: serde_json::Value) -> BackendRecord {
        serde_json::from_value(json!({ "data": data })).unwrap()
    }

    #[test]
    fn field_name_is_lowercased() {
        let r = SecretReference::new("DBPass", "kv/app/db");
        assert_eq!(r.field_name(), "dbpass");
        assert_eq!(r.name, "DBPass");
    }

    #[test]
    fn field_lookup_lowercases_requested_name() {
        let rec = record(json!({ "dbpass": "s3cr3t" }));
        assert_eq!(rec.field("DBPASS"), "s3cr3t");
    }

    #[test]
    fn missing_field_is_empty() {
        let rec = record(json!({ "other": "x" }));
        assert_eq!(rec.field("dbpass"), "");
        assert_eq!(BackendRecord::default().field("dbpass"), "");
    }

    #[test]
    fn non_string_field_is_empty() {
        let rec = record(json!({ "port": 5432, "enabled": true, "nested": {"a": "b"} }));
        assert_eq!(rec.field("port"), "");
        assert_eq!(rec.field("enabled"), "");
        assert_eq!(rec.field("nested"), "");
    }

    #[test]
    fn field_lookup_is_exact_on_lowercase_key() {
        // Upper-case keys in the backend never match.
        let rec = record(json!({ "DBPASS": "s3cr3t" }));
        assert_eq!(rec.field("DBPASS"), "");
    }

    #[test]
    fn session_helpers() {
        assert!(Session::default().is_empty());
        let s = Session::new("hvs.abc");
        assert_eq!(s.token(), "hvs.abc");
        assert!(!s.is_empty());
    }
}
