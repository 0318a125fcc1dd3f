//! Environment scanner.
//!
//! Turns `<PREFIX>NAME=mount/sub/path` variables into [`SecretReference`]s.

use super::types::SecretReference;
use tracing::debug;

/// Collect references from `KEY=VALUE` entries whose key starts with `prefix`.
///
/// Entries are split on the first `=`, so locators may contain `=`.
/// Entries without any `=` are skipped. Relative order is preserved.
pub fn scan_entries<I, S>(entries: I, prefix: &str) -> Vec<SecretReference>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            let Some((key, value)) = entry.split_once('=') else {
                debug!("Skipping environment entry without '='");
                return None;
            };
            reference_for(key, value, prefix)
        })
        .collect()
}

/// Same as [`scan_entries`] for already-split key/value pairs.
pub fn scan_vars<I, K, V>(vars: I, prefix: &str) -> Vec<SecretReference>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    vars.into_iter()
        .filter_map(|(k, v)| reference_for(k.as_ref(), v.as_ref(), prefix))
        .collect()
}

/// Scan the current process environment.
///
/// Variables that are not valid unicode are ignored.
pub fn scan_process_env(prefix: &str) -> Vec<SecretReference> {
    let refs = scan_vars(std::env::vars_os().filter_map(|(k, v)| {
        Some((k.into_string().ok()?, v.into_string().ok()?))
    }), prefix);
    debug!("Found {} secret reference(s) with prefix '{prefix}'", refs.len());
    refs
}

fn reference_for(key: &str, value: &str, prefix: &str) -> Option<SecretReference> {
    let name = key.strip_prefix(prefix)?;
    Some(SecretReference::new(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_prefix_and_keeps_locator() {
        let refs = scan_entries(["SECRET_DBPASS=kv/app/db"], "SECRET_");
        assert_eq!(refs, vec![SecretReference::new("DBPASS", "kv/app/db")]);
    }

    #[test]
    fn ignores_non_matching_keys_and_keeps_order() {
        let env = [
            "PATH=/usr/bin",
            "SECRET_B=kv/b",
            "HOME=/root",
            "SECRET_A=kv/a",
            "SECRET_C=kv/c/d",
        ];
        let refs = scan_entries(env, "SECRET_");
        assert_eq!(
            refs,
            vec![
                SecretReference::new("B", "kv/b"),
                SecretReference::new("A", "kv/a"),
                SecretReference::new("C", "kv/c/d"),
            ]
        );
    }

    #[test]
    fn prefix_must_be_at_start_of_key() {
        let refs = scan_entries(["MY_SECRET_X=kv/x", "XSECRET_Y=kv/y"], "SECRET_");
        assert!(refs.is_empty());
    }

    #[test]
    fn value_keeps_equals_signs() {
        let refs = scan_entries(["SECRET_TOKEN=kv/a=b/c"], "SECRET_");
        assert_eq!(refs[0].locator, "kv/a=b/c");
    }

    #[test]
    fn entries_without_equals_are_skipped() {
        let refs = scan_entries(["SECRET_BROKEN", "SECRET_OK=kv/ok"], "SECRET_");
        assert_eq!(refs, vec![SecretReference::new("OK", "kv/ok")]);
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let refs = scan_entries(["A=1", "B=2"], "");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "A");
    }

    #[test]
    fn bare_prefix_key_yields_empty_name() {
        let refs = scan_entries(["SECRET_=kv/x"], "SECRET_");
        assert_eq!(refs, vec![SecretReference::new("", "kv/x")]);
    }

    #[test]
    fn scan_vars_matches_scan_entries() {
        let vars = vec![("SECRET_A", "kv/a"), ("OTHER", "x")];
        assert_eq!(scan_vars(vars, "SECRET_"), scan_entries(["SECRET_A=kv/a"], "SECRET_"));
    }

    #[test]
    fn scan_process_env_matches_snapshot_scan() {
        // Reads the environment without modifying it.
        assert_eq!(
            scan_process_env("CARGO_"),
            scan_vars(std::env::vars(), "CARGO_")
        );
    }
}
