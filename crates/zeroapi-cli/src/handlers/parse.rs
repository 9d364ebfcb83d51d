//! `zeroapi parse` handler.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use zeroapi_core::ParsedDocument;

use super::render_json;
use crate::CliContext;
use crate::commands::Section;

/// Parse one file and print the document (or one section of it).
pub fn execute(ctx: &CliContext, file: &Path, pretty: bool, section: Option<Section>) -> Result<()> {
    let parser = ctx.parser()?;
    let document = parser.parse_file(file)?;
    println!("{}", render_json(&select_section(document, section), pretty)?);
    Ok(())
}

/// Project the document onto the requested section. Missing sections render empty.
pub fn select_section(document: ParsedDocument, section: Option<Section>) -> Value {
    match section {
        None => document.into_value(),
        Some(Section::Info) => Value::Object(document.info()),
        Some(Section::Syntax) => document.syntax().cloned().unwrap_or(Value::Null),
        Some(Section::Imports) => Value::Array(document.imports().to_vec()),
        Some(Section::Types) => Value::Array(document.types().to_vec()),
        Some(Section::Service) => Value::Object(document.service()),
        Some(Section::Groups) => Value::Array(document.groups().to_vec()),
    }
}
