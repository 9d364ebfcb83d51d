//! Environment-driven configuration.
//!
//! Every setting is optional; unset values fall back to auto-detection.
//! Adapters may load a `.env` file first (the CLI does, via `dotenvy`).

use std::path::PathBuf;

use serde::Serialize;

use crate::paths::{ParserLayout, PathError, package_root};

/// Explicit parser executable; switches the resolver to explicit mode.
pub const ENV_PARSER_PATH: &str = "ZEROAPI_PARSER_PATH";
/// Package root override.
pub const ENV_PACKAGE_DIR: &str = "ZEROAPI_PACKAGE_DIR";
/// On-demand build output override.
pub const ENV_COMPILED_PATH: &str = "ZEROAPI_COMPILED_PATH";
/// Go toolchain program name or path.
pub const ENV_GO_BIN: &str = "ZEROAPI_GO_BIN";

/// Default Go toolchain program.
pub const DEFAULT_GO_BIN: &str = "go";

/// Resolved configuration for the parser façade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParserConfig {
    pub executable: Option<PathBuf>,
    pub package_dir: Option<PathBuf>,
    pub compiled_path: Option<PathBuf>,
    pub go_bin: Option<String>,
}

impl ParserConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            executable: get(ENV_PARSER_PATH).map(PathBuf::from),
            package_dir: get(ENV_PACKAGE_DIR).map(PathBuf::from),
            compiled_path: get(ENV_COMPILED_PATH).map(PathBuf::from),
            go_bin: get(ENV_GO_BIN),
        }
    }

    /// Go program to probe and build with.
    pub fn go_bin(&self) -> &str {
        self.go_bin.as_deref().unwrap_or(DEFAULT_GO_BIN)
    }

    /// Build the package layout, honoring the root and build-output overrides.
    pub fn layout(&self) -> Result<ParserLayout, PathError> {
        let root = match &self.package_dir {
            Some(dir) => dir.clone(),
            None => package_root()?,
        };

        let layout = ParserLayout::from_root(root);
        Ok(match &self.compiled_path {
            Some(path) => layout.with_compiled_binary(path),
            None => layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = ParserConfig::from_lookup(|_| None);
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.go_bin(), "go");
    }

    #[test]
    fn test_all_overrides() {
        let config = ParserConfig::from_lookup(lookup_from(&[
            (ENV_PARSER_PATH, "/usr/local/bin/api-parser"),
            (ENV_PACKAGE_DIR, "/opt/zeroapi"),
            (ENV_COMPILED_PATH, "/tmp/zeroapi/parser"),
            (ENV_GO_BIN, "/usr/lib/go-1.22/bin/go"),
        ]));

        assert_eq!(
            config.executable,
            Some(PathBuf::from("/usr/local/bin/api-parser"))
        );
        assert_eq!(config.go_bin(), "/usr/lib/go-1.22/bin/go");

        let layout = config.layout().unwrap();
        assert_eq!(layout.package_root, PathBuf::from("/opt/zeroapi"));
        assert_eq!(layout.compiled_binary, PathBuf::from("/tmp/zeroapi/parser"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ParserConfig::from_lookup(lookup_from(&[(ENV_PARSER_PATH, "  ")]));
        assert!(config.executable.is_none());
    }
}
