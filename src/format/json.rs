//! JSON re-indentation.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Default indent step.
pub const DEFAULT_INDENT: &str = " ";

/// Re-indent `data` with `indent` per nesting level.
///
/// Invalid JSON is logged and yields an empty string.
pub fn format_json(data: &[u8], indent: &str) -> String {
    match format_json_strict(data, indent) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!(error = %e, bytes = data.len(), "Response is not valid JSON");
            String::new()
        }
    }
}

/// Re-indent `data`, returning the parse error instead of swallowing it.
pub fn format_json_strict(data: &[u8], indent: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_slice(data)?;

    let mut out = Vec::with_capacity(data.len() * 2);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
