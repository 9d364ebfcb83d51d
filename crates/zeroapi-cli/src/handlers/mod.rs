//! Command handlers.
//!
//! Each handler takes the [`crate::CliContext`], calls into the runtime and
//! formats the result for the terminal. JSON goes to stdout; logs go to stderr.

pub mod batch;
pub mod parse;
pub mod paths;
pub mod resolve;
pub mod system;

use anyhow::Result;
use serde_json::Value;

/// Serialize `value` as compact or pretty JSON.
pub(crate) fn render_json(value: &Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
