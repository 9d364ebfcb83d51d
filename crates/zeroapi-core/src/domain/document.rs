//! Decoded parser output and its section views.
//!
//! The parser's JSON schema belongs to the external tool and shifts between
//! versions, so the document is kept as a generic JSON tree. The view methods
//! do the key lookups and never fail: a missing, `null` or mistyped section
//! reads as an empty container.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::outcome::InvocationOutcome;
use crate::error::{ParserError, ParserResult};

/// Per-file decode result in a batch: the document or the rendered error.
pub type DocumentOutcome = Result<ParsedDocument, String>;

/// A successfully decoded parser result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedDocument {
    root: Map<String, Value>,
}

impl ParsedDocument {
    /// Decode raw parser output.
    ///
    /// Fails with [`ParserError::DecodeFailed`] carrying both the decoder
    /// diagnostic and `raw`, including when the top level is not an object.
    pub fn decode(raw: &str) -> ParserResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ParserError::decode_failed(e, raw))?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ParserError::decode_failed(
                format!("expected a JSON object, found {}", json_kind(&other)),
                raw,
            )),
        }
    }

    /// Whole-document access.
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Re-encode the document, optionally pretty-printed.
    pub fn to_json_string(&self, pretty: bool) -> ParserResult<String> {
        let encoded = if pretty {
            serde_json::to_string_pretty(&self.root)
        } else {
            serde_json::to_string(&self.root)
        };
        encoded.map_err(|e| ParserError::decode_failed(e, String::new()))
    }

    // === Section views ===

    /// The `info` block (title, desc, author, version, ...).
    pub fn info(&self) -> Map<String, Value> {
        object_or_empty(section(&self.root, "info"))
    }

    /// The `syntax` declaration, if present. Shape varies by tool version.
    pub fn syntax(&self) -> Option<&Value> {
        section(&self.root, "syntax")
    }

    pub fn imports(&self) -> &[Value] {
        array_or_empty(section(&self.root, "imports"))
    }

    /// Raw type definitions, in declaration order.
    pub fn types(&self) -> &[Value] {
        array_or_empty(section(&self.root, "types"))
    }

    /// The `service` tree.
    pub fn service(&self) -> Map<String, Value> {
        object_or_empty(section(&self.root, "service"))
    }

    /// Route groups of the service, each with its annotation block and routes.
    pub fn groups(&self) -> &[Value] {
        section(&self.root, "service")
            .and_then(Value::as_object)
            .map(|service| array_or_empty(section(service, "groups")))
            .unwrap_or_default()
    }

    /// All routes in group order. Falls back to `service.routes` when the
    /// tool emits a flat route list instead of groups.
    pub fn routes(&self) -> Vec<&Value> {
        let Some(service) = section(&self.root, "service").and_then(Value::as_object) else {
            return Vec::new();
        };

        let groups = array_or_empty(section(service, "groups"));
        if groups.is_empty() {
            return array_or_empty(section(service, "routes")).iter().collect();
        }

        groups
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|group| array_or_empty(section(group, "routes")))
            .collect()
    }

    /// Best-effort typed projection of [`Self::types`].
    pub fn type_definitions(&self) -> Vec<TypeDefinition> {
        self.types()
            .iter()
            .filter_map(Value::as_object)
            .map(TypeDefinition::from_object)
            .collect()
    }
}

/// A type declaration projected from the raw tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<TypeField>,
}

/// One field of a [`TypeDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
}

impl TypeDefinition {
    // Accepts both the flattened `{name, fields}` shape and the raw go-zero
    // `{RawName, Members}` shape.
    fn from_object(object: &Map<String, Value>) -> Self {
        let name = ["name", "Name", "RawName"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        let fields = ["fields", "Fields", "Members"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array))
            .map(|members| {
                members
                    .iter()
                    .filter_map(Value::as_object)
                    .map(TypeField::from_object)
                    .collect()
            })
            .unwrap_or_default();

        Self { name, fields }
    }
}

impl TypeField {
    fn from_object(object: &Map<String, Value>) -> Self {
        let name = section(object, "name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let type_name = match section(object, "type") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Object(t)) => ["RawName", "Name", "name"]
                .iter()
                .find_map(|key| t.get(*key).and_then(Value::as_str))
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };

        let optional = section(object, "optional")
            .and_then(Value::as_bool)
            .unwrap_or_else(|| {
                section(object, "tag")
                    .and_then(Value::as_str)
                    .is_some_and(|tag| tag.contains("optional"))
            });

        Self {
            name,
            type_name,
            optional,
        }
    }
}

/// Decode every successful invocation independently.
///
/// Failed invocations keep their error; a decode failure becomes an error
/// entry for that key without affecting the others.
pub fn decode_batch<I>(outcomes: I) -> HashMap<PathBuf, DocumentOutcome>
where
    I: IntoIterator<Item = (PathBuf, InvocationOutcome)>,
{
    outcomes
        .into_iter()
        .map(|(path, outcome)| {
            let decoded = match outcome {
                InvocationOutcome::Success { output } => {
                    ParsedDocument::decode(&output).map_err(|e| {
                        warn!(path = %path.display(), "Parser output is not valid JSON");
                        e.to_string()
                    })
                }
                InvocationOutcome::Failure { error } => Err(error),
            };
            (path, decoded)
        })
        .collect()
}

// ============================================================================
// Lookup helpers
// ============================================================================

/// Look up `key`, then its capitalized spelling (`info` → `Info`). `null`
/// counts as absent because Go marshals empty slices as `null`.
fn section<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let present = |name: &str| map.get(name).filter(|value| !value.is_null());
    present(key).or_else(|| present(&capitalize(key)))
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn array_or_empty(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn object_or_empty(value: Option<&Value>) -> Map<String, Value> {
    value.and_then(Value::as_object).cloned().unwrap_or_default()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_document_sections() {
        let doc = ParsedDocument::decode(r#"{"info":{"title":"T"},"types":[],"service":{}}"#)
            .unwrap();

        assert!(doc.types().is_empty());
        assert!(doc.service().is_empty());
        assert_eq!(Value::Object(doc.info()), json!({"title": "T"}));
        assert!(doc.imports().is_empty());
        assert!(doc.routes().is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc = ParsedDocument::decode("{}").unwrap();

        assert!(doc.info().is_empty());
        assert!(doc.imports().is_empty());
        assert!(doc.types().is_empty());
        assert!(doc.service().is_empty());
        assert!(doc.groups().is_empty());
        assert!(doc.syntax().is_none());
    }

    #[test]
    fn test_null_section_falls_back_to_capitalized_key() {
        let doc = ParsedDocument::decode(r#"{"info":null,"Info":{"title":"X"}}"#).unwrap();

        assert_eq!(Value::Object(doc.info()), json!({"title": "X"}));
    }

    #[test]
    fn test_capitalized_keys_and_null_sections() {
        let doc = ParsedDocument::decode(
            r#"{
                "Syntax": {"Version": "v1"},
                "Info": {"Properties": {"title": "admin"}},
                "Imports": null,
                "Types": [{"RawName": "LoginReq", "Members": [
                    {"Name": "Username", "Type": {"RawName": "string"}, "Tag": "`json:\"username\"`"},
                    {"Name": "Remember", "Type": {"RawName": "bool"}, "Tag": "`json:\"remember,optional\"`"}
                ]}],
                "Service": {"Name": "admin-api", "Groups": [
                    {"Annotation": {"Properties": {"prefix": "/v1"}}, "Routes": [
                        {"Method": "post", "Path": "/login"},
                        {"Method": "get", "Path": "/me"}
                    ]},
                    {"Annotation": {"Properties": {}}, "Routes": [
                        {"Method": "get", "Path": "/ping"}
                    ]}
                ]}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.syntax(), Some(&json!({"Version": "v1"})));
        assert_eq!(doc.info()["Properties"]["title"], "admin");
        assert!(doc.imports().is_empty());
        assert_eq!(doc.groups().len(), 2);

        let paths: Vec<&str> = doc
            .routes()
            .iter()
            .filter_map(|r| r["Path"].as_str())
            .collect();
        assert_eq!(paths, vec!["/login", "/me", "/ping"]);

        let types = doc.type_definitions();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "LoginReq");
        assert_eq!(types[0].fields[0].type_name, "string");
        assert!(!types[0].fields[0].optional);
        assert!(types[0].fields[1].optional);
    }

    #[test]
    fn test_flat_type_shape() {
        let doc = ParsedDocument::decode(
            r#"{"types":[{"name":"User","fields":[{"name":"id","type":"int64","optional":false},{"name":"nick","type":"string","optional":true}]}]}"#,
        )
        .unwrap();

        let types = doc.type_definitions();
        assert_eq!(
            types,
            vec![TypeDefinition {
                name: "User".to_string(),
                fields: vec![
                    TypeField {
                        name: "id".to_string(),
                        type_name: "int64".to_string(),
                        optional: false,
                    },
                    TypeField {
                        name: "nick".to_string(),
                        type_name: "string".to_string(),
                        optional: true,
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_flat_service_routes() {
        let doc =
            ParsedDocument::decode(r#"{"service":{"name":"s","routes":[{"path":"/a"}]}}"#).unwrap();
        assert_eq!(doc.routes(), vec![&json!({"path": "/a"})]);
    }

    #[test]
    fn test_malformed_output_fails_with_raw_text() {
        let err = ParsedDocument::decode("panic: runtime error").unwrap_err();
        match err {
            ParserError::DecodeFailed { reason, raw } => {
                assert!(!reason.is_empty());
                assert_eq!(raw, "panic: runtime error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_top_level_is_rejected() {
        let err = ParsedDocument::decode("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));

        assert!(ParsedDocument::decode("").is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_tree() {
        let raw = r#"{"info":{"title":"T"},"extra":{"k":[1,2,3]}}"#;
        let doc = ParsedDocument::decode(raw).unwrap();
        let reencoded = doc.to_json_string(false).unwrap();
        assert_eq!(ParsedDocument::decode(&reencoded).unwrap(), doc);
        assert!(doc.to_json_string(true).unwrap().contains('\n'));
    }

    #[test]
    fn test_decode_batch_isolates_failures() {
        let outcomes = vec![
            (PathBuf::from("good.api"), InvocationOutcome::success(r#"{"info":{}}"#)),
            (PathBuf::from("garbage.api"), InvocationOutcome::success("not json")),
            (
                PathBuf::from("missing.api"),
                InvocationOutcome::failure("API file not found: missing.api"),
            ),
        ];

        let decoded = decode_batch(outcomes);

        assert_eq!(decoded.len(), 3);
        assert!(decoded[&PathBuf::from("good.api")].is_ok());
        assert!(
            decoded[&PathBuf::from("garbage.api")]
                .as_ref()
                .unwrap_err()
                .starts_with("JSON decode failed")
        );
        assert_eq!(
            decoded[&PathBuf::from("missing.api")].as_ref().unwrap_err(),
            "API file not found: missing.api"
        );
    }
}
