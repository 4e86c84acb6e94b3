//! JSON output for `--json` mode.

use log::debug;
use serde::Serialize;
use serde_json::{json, Value};

/// Serialize any report with pretty printing
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Print one JSON document to stdout
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    let rendered = to_json(value)?;
    debug!("Emitting {} bytes of JSON", rendered.len());
    println!("{}", rendered);
    Ok(())
}

/// The single error object printed on failure in JSON mode
pub fn error_payload(message: &str) -> Value {
    json!({ "error": message })
}
