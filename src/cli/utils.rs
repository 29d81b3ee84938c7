//! Shared CLI utilities.

use anyhow::Result;
use serde_json::Value;

/// Turn a `--set KEY=VALUE` pair into the `--KEY=VALUE` argument the store's
/// argument layer understands.
pub fn override_arg(pair: &str) -> Result<String> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok(format!("--{}={}", key.trim(), value)),
        _ => anyhow::bail!("Invalid override '{pair}'. Use KEY=VALUE"),
    }
}

/// Strings print raw, mappings and arrays as pretty JSON.
pub fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string_pretty(value)?,
        other => other.to_string(),
    })
}
