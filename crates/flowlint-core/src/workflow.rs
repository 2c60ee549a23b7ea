//! Read-only view over a loaded workflow document.
//!
//! Workflow files are loosely typed JSON. Every lookup goes through
//! [`Section`], which treats a missing key and a value of the wrong JSON type
//! the same way: the caller gets the default. Nothing in this module can fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name reported for workflows without a string `name` field.
pub const DEFAULT_WORKFLOW_NAME: &str = "Unnamed Workflow";

/// Name reported for nodes without a string `name` field.
pub const DEFAULT_NODE_NAME: &str = "Unknown";

/// A workflow document as produced by the loader (or any other source).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workflow {
    raw: Value,
}

impl Workflow {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The underlying JSON value, untouched.
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }

    /// Top-level fields of the document.
    pub fn root(&self) -> Section<'_> {
        Section::of(&self.raw)
    }

    /// Display name, or [`DEFAULT_WORKFLOW_NAME`].
    pub fn name(&self) -> &str {
        self.root().str_or("name", DEFAULT_WORKFLOW_NAME)
    }

    /// Nodes in document order. Entries that are not objects still yield a
    /// node, with every field defaulted.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        self.root().list("nodes").iter().map(NodeView::new)
    }

    /// Workflow-level `settings` mapping.
    pub fn settings(&self) -> Section<'_> {
        self.root().section("settings")
    }
}

impl From<Value> for Workflow {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

impl From<Map<String, Value>> for Workflow {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(Value::Object(map))
    }
}

/// One processing step inside a workflow.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    fields: Section<'a>,
}

impl<'a> NodeView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: Section::of(value),
        }
    }

    /// Node kind identifier, e.g. `n8n-nodes-base.webhook`. Empty when absent.
    pub fn node_type(&self) -> &'a str {
        self.fields.str_or("type", "")
    }

    /// Instance name, or [`DEFAULT_NODE_NAME`].
    pub fn name(&self) -> &'a str {
        self.fields.str_or("name", DEFAULT_NODE_NAME)
    }

    pub fn parameters(&self) -> Section<'a> {
        self.fields.section("parameters")
    }

    /// Case-insensitive substring match on the node type.
    ///
    /// Type identifiers differ in casing and namespace prefix between n8n
    /// versions, so `"webhook"` matches `n8n-nodes-base.webhook` as well as
    /// `@n8n/n8n-nodes-langchain.mcpWebhook`.
    pub fn type_contains(&self, needle: &str) -> bool {
        self.node_type()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Total accessor over an optional JSON object.
///
/// Built from any [`Value`]; a non-object value behaves like an empty mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Section<'a> {
    pub fn of(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    /// Key presence only; the value is not inspected.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.is_some_and(|m| m.contains_key(key))
    }

    pub fn is_empty(&self) -> bool {
        self.map.map_or(true, |m| m.is_empty())
    }

    pub fn str_or(&self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Nested mapping; empty when absent or not an object.
    pub fn section(&self, key: &str) -> Section<'a> {
        Section {
            map: self.get(key).and_then(Value::as_object),
        }
    }

    /// Nested sequence; empty when absent or not an array.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `key` holds a truthy value (see [`is_truthy`]). Absent is false.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }
}

/// JSON truthiness: null, `false`, zero, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
