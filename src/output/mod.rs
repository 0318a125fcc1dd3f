//! Export-line rendering.
//!
//! Values are written verbatim. Nothing is quoted or escaped, so a value
//! containing shell metacharacters reaches the consuming shell unchanged.

use std::io::Write;

use crate::secrets::types::ResolvedSecret;

/// Render `\nexport NAME=VALUE` for every secret, in order.
pub fn render_exports(secrets: &[ResolvedSecret]) -> String {
    secrets
        .iter()
        .map(|s| format!("\nexport {}={}", s.name, s.value))
        .collect()
}

/// Write the rendered lines and flush.
pub fn write_exports<W: Write>(mut writer: W, secrets: &[ResolvedSecret]) -> std::io::Result<()> {
    writer.write_all(render_exports(secrets).as_bytes())?;
    writer.flush()
}
