//! Shared fixture builders for conversion tests.
use henkan::prelude::*;

/// Wraps nodes and edges in a graph document with fixed metadata.
#[allow(dead_code)]
pub fn graph(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> GraphDefinition {
    GraphDefinition {
        id: "g1".to_string(),
        name: "Test graph".to_string(),
        kind: "behavior".to_string(),
        nodes,
        edges,
    }
}

/// A bare node of the given kind with no ports or payload.
#[allow(dead_code)]
pub fn node(id: &str, kind: &str) -> GraphNode {
    GraphNode {
        id: Some(id.to_string()),
        kind: kind.to_string(),
        inputs: Vec::new(),
        outputs: Vec::new(),
        condition_state: None,
        call_expression: None,
    }
}

/// An edge between the default ports of two nodes.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        source_node: source.to_string(),
        source_port: DEFAULT_PORT.to_string(),
        target_node: target.to_string(),
        target_port: DEFAULT_PORT.to_string(),
    }
}

/// A port descriptor with a single-letter primitive code.
#[allow(dead_code)]
pub fn port(id: &str, code: &str, name: &str) -> PortDefinition {
    PortDefinition {
        id: id.to_string(),
        primitive_type: code.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}

/// A structured predicate record.
#[allow(dead_code)]
pub fn record(
    segments: &[&str],
    value: serde_json::Value,
    operator: &str,
    negation: bool,
) -> ConditionRecord {
    ConditionRecord {
        segments: segments.iter().map(|s| s.to_string()).collect(),
        value,
        compare_operator: operator.to_string(),
        negation,
        partial_match: false,
    }
}
