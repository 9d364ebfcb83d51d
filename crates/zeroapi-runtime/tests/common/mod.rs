//! Shared fixtures: stand-in parser scripts and `.api` inputs.
//!
//! The stand-in parser prints a small JSON document named after its input
//! file, or fails with a diagnostic on stderr when the input contains
//! `BROKEN`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use zeroapi_core::ExecutableDescriptor;
use zeroapi_runtime::Executor;

pub const MOCK_PARSER: &str = r#"#!/bin/sh
if grep -q BROKEN "$1"; then
  echo "parse error: unexpected token in $1" >&2
  exit 1
fi
printf '{"info":{"title":"%s"},"syntax":{"version":"v1"},"types":[{"name":"Req"}],"service":{"name":"demo"}}\n' "$(basename "$1")"
"#;

pub fn write_executable(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn write_api(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn mock_parser(dir: &Path) -> PathBuf {
    write_executable(dir, "api-parser", MOCK_PARSER)
}

pub fn mock_executor(dir: &Path) -> Executor {
    Executor::from_descriptor(ExecutableDescriptor::explicit(mock_parser(dir)))
}
