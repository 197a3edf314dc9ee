//! JSON output formatting

use serde::Serialize;

use crate::error::Result;
use crate::snapshot::ScanResult;

/// Pretty-print any snapshot value with 2-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render the full JSON artifact.
pub fn render_json(result: &ScanResult) -> Result<String> {
    to_pretty_json(result)
}

/// Decode a JSON artifact back into a snapshot.
pub fn parse_json(text: &str) -> Result<ScanResult> {
    Ok(serde_json::from_str(text)?)
}
