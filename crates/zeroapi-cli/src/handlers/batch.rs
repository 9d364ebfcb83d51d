//! `zeroapi parse-many` handler.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Map, Value, json};
use zeroapi_core::DocumentOutcome;

use super::render_json;
use crate::{CliContext, CliError};

/// Parse every file and print one JSON object keyed by path.
///
/// Exits non-zero when any file failed, after printing the full report.
pub fn execute(ctx: &CliContext, files: &[PathBuf], pretty: bool) -> Result<()> {
    let parser = ctx.parser()?;
    let results = parser.parse_multiple_files(files);

    let (report, failed) = batch_report(files, &results);
    println!("{}", render_json(&report, pretty)?);

    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: report.as_object().map_or(0, Map::len),
        }
        .into());
    }
    Ok(())
}

/// Build the `{path: {success, document | error}}` report and count failures.
pub fn batch_report(
    files: &[PathBuf],
    results: &HashMap<PathBuf, DocumentOutcome>,
) -> (Value, usize) {
    let mut report = Map::new();
    let mut failed = 0;
    let mut seen = HashSet::new();

    for path in files {
        if !seen.insert(path) {
            continue;
        }
        let entry = match results.get(path) {
            Some(Ok(document)) => json!({ "success": true, "document": document }),
            Some(Err(error)) => {
                failed += 1;
                json!({ "success": false, "error": error })
            }
            None => continue,
        };
        report.insert(path.display().to_string(), entry);
    }

    (Value::Object(report), failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroapi_core::ParsedDocument;

    #[test]
    fn test_report_counts_failures_once_per_path() {
        let good = PathBuf::from("good.api");
        let bad = PathBuf::from("bad.api");
        let mut results = HashMap::new();
        results.insert(good.clone(), Ok(ParsedDocument::decode("{}").unwrap()));
        results.insert(bad.clone(), Err("API parse execution failed: boom".to_string()));

        let files = vec![good, bad.clone(), bad];
        let (report, failed) = batch_report(&files, &results);

        assert_eq!(failed, 1);
        assert_eq!(report["good.api"]["success"], json!(true));
        assert_eq!(report["bad.api"]["error"], json!("API parse execution failed: boom"));
    }
}
