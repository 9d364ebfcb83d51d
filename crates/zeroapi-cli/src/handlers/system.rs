//! `zeroapi system-info` handler.

use anyhow::Result;
use zeroapi_runtime::{MIN_GO_VERSION, SystemInfo};

use crate::CliContext;

pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let info = ctx.resolver.system_info();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", format_system_info(&info));
    }
    Ok(())
}

fn format_system_info(info: &SystemInfo) -> String {
    let (major, minor) = MIN_GO_VERSION;
    [
        format!("os = {}", info.os),
        format!("arch = {}", info.arch),
        format!("zeroapi_version = {}", info.zeroapi_version),
        format!("go_available = {}", info.go_available),
        format!("go_version = {}", info.go_version.as_deref().unwrap_or("-")),
        format!("go_compatible = {} (requires go{major}.{minor}+)", info.go_compatible),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format() {
        let info = SystemInfo {
            os: "linux".into(),
            arch: "x86_64".into(),
            zeroapi_version: "0.3.0",
            go_available: false,
            go_version: None,
            go_compatible: false,
        };

        let text = format_system_info(&info);

        assert!(text.contains("os = linux"));
        assert!(text.contains("go_version = -"));
        assert!(text.contains("requires go1.21+"));
    }
}
