//! The server-owned behavior-graph document model.
//!
//! These structs mirror the backend JSON, including the quirks older
//! documents still carry: condition state as either one group object or an
//! array of groups, legacy free-text predicate expressions, and nodes that
//! arrive without an id.

use serde::{Deserialize, Serialize};

/// Reserved socket id implicitly used when a node has exactly one unnamed
/// connection point.
pub const DEFAULT_PORT: &str = "default";

/// Id namespace that forces a node to the condition kind regardless of its
/// declared kind. Some backend versions mistag condition nodes.
pub const CONDITION_PREFIX: &str = "condition-";

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

/// A complete behavior-graph document as the storage service delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub id: String,
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// A single node of the behavior graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Missing on malformed documents; such nodes are dropped during
    /// conversion while the rest of the document goes through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PortDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<PortDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_state: Option<ConditionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_expression: Option<CallExpression>,
}

/// An ordered port descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDefinition {
    pub id: String,
    /// Single-letter primitive code: `s`, `n`, `b` or `u`.
    #[serde(default)]
    pub primitive_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Condition state appears as a single group object or an array of groups,
/// depending on the backend version that wrote the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionState {
    Grouped(Vec<ConditionGroup>),
    Single(ConditionGroup),
}

impl ConditionState {
    /// The predicate groups regardless of physical shape.
    pub fn groups(&self) -> &[ConditionGroup] {
        match self {
            ConditionState::Grouped(groups) => groups,
            ConditionState::Single(group) => std::slice::from_ref(group),
        }
    }
}

/// One named predicate group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// Empty on legacy documents that predate grouping.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionRecord>,
    /// Legacy free-text predicate, present instead of `conditions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// One structured predicate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    #[serde(default)]
    pub segments: Vec<String>,
    #[serde(default)]
    pub value: serde_json::Value,
    pub compare_operator: String,
    #[serde(default)]
    pub negation: bool,
    #[serde(default)]
    pub partial_match: bool,
}

/// The call expression attached to an invoke node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    pub callee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A directed edge between two node ports. Both endpoints must reference ids
/// in the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source_node: String,
    #[serde(default = "default_port")]
    pub source_port: String,
    pub target_node: String,
    #[serde(default = "default_port")]
    pub target_port: String,
}
