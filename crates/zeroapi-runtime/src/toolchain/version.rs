//! `go version` output parsing.

/// Oldest Go release the parser sources build with.
pub const MIN_GO_VERSION: (u32, u32) = (1, 21);

/// Parse a version string into a (major, minor) tuple.
///
/// Extracts only the leading numeric portion of each component,
/// so "1.21rc2" successfully parses as (1, 21).
fn parse_version_tuple(version_str: &str) -> Option<(u32, u32)> {
    let mut parts = version_str.split('.');
    let parse_numeric = |part: &str| -> Option<u32> {
        let numeric_str: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
        numeric_str.parse::<u32>().ok()
    };
    let major = parse_numeric(parts.next()?)?;
    let minor = parse_numeric(parts.next()?)?;
    Some((major, minor))
}

/// Extract (major, minor) from `go version` output such as
/// `go version go1.22.3 linux/amd64`.
pub fn parse_go_version(output: &str) -> Option<(u32, u32)> {
    output
        .split_whitespace()
        .filter_map(|word| word.strip_prefix("go"))
        .find(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(parse_version_tuple)
}

/// Whether the reported version is at least [`MIN_GO_VERSION`].
pub fn is_compatible(output: &str) -> bool {
    parse_go_version(output).is_some_and(|version| version >= MIN_GO_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_output() {
        assert_eq!(
            parse_go_version("go version go1.22.3 linux/amd64"),
            Some((1, 22))
        );
        assert_eq!(
            parse_go_version("go version go1.21rc2 darwin/arm64"),
            Some((1, 21))
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_go_version(""), None);
        assert_eq!(parse_go_version("go version devel"), None);
        assert_eq!(parse_go_version("gopher"), None);
    }

    #[test]
    fn test_compatibility_threshold() {
        assert!(is_compatible("go version go1.21.0 linux/amd64"));
        assert!(is_compatible("go version go2.0 linux/amd64"));
        assert!(!is_compatible("go version go1.20.14 linux/amd64"));
        assert!(!is_compatible("not go"));
    }
}
