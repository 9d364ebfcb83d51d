//! Per-file result of running the parser.

use serde::Serialize;

/// Outcome of one invocation inside a batch.
///
/// Exactly one of output/error exists, which the enum enforces. Serializes as
/// `{"success": true, "output": ...}` or `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Zero exit status; raw, uninterpreted output.
    Success { output: String },
    /// Any failure; the rendered error message.
    Failure { error: String },
}

impl InvocationOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self::Success {
            output: output.into(),
        }
    }

    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output } => Some(output),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for InvocationOutcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(e) => Self::failure(e),
        }
    }
}

impl Serialize for InvocationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("InvocationOutcome", 2)?;
        state.serialize_field("success", &self.is_success())?;
        match self {
            Self::Success { output } => state.serialize_field("output", output)?,
            Self::Failure { error } => state.serialize_field("error", error)?,
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_side_populated() {
        let ok = InvocationOutcome::success("{}");
        assert!(ok.is_success());
        assert_eq!(ok.output(), Some("{}"));
        assert_eq!(ok.error(), None);

        let failed = InvocationOutcome::failure("API file not found: x.api");
        assert!(!failed.is_success());
        assert_eq!(failed.output(), None);
        assert_eq!(failed.error(), Some("API file not found: x.api"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(InvocationOutcome::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));

        let json = serde_json::to_value(InvocationOutcome::success("out")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "output": "out"}));
    }

    #[test]
    fn test_from_result() {
        let outcome: InvocationOutcome = Err::<String, _>("exit 1").into();
        assert_eq!(outcome.error(), Some("exit 1"));
    }
}
