//! Output formatting.

pub mod json;

pub use json::{format_json, format_json_strict, DEFAULT_INDENT};
