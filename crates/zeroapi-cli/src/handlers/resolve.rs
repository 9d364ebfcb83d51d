//! `zeroapi resolve` handler.

use anyhow::Result;
use zeroapi_runtime::ResolveDebugInfo;

use crate::{CliContext, CliError};

/// Print the resolution trace. Fails (after printing) when nothing resolved.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let info = ctx.resolver.resolve_debug(ctx.config.executable.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", format_report(&info));
    }

    match info.error {
        Some(error) => Err(CliError::Resolution(error).into()),
        None => Ok(()),
    }
}

fn format_report(info: &ResolveDebugInfo) -> String {
    let mut lines = vec![format!("platform = {}", info.platform)];

    for attempt in &info.attempts {
        let mut line = format!(
            "  [{:?}] {:?}: {}",
            attempt.outcome,
            attempt.source,
            attempt.candidate.display()
        );
        if let Some(detail) = &attempt.detail {
            line.push_str(&format!(" ({detail})"));
        }
        lines.push(line);
    }

    match &info.resolved_path {
        Some(path) => lines.push(format!(
            "resolved = {} (auto_detected = {})",
            path.display(),
            info.auto_detected
        )),
        None => lines.push("resolved = <none>".to_string()),
    }

    lines.join("\n")
}
