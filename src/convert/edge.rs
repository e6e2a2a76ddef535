//! Backend edge to canvas edge rewriting.

use ahash::AHashSet;
use tracing::warn;

use crate::canvas::CanvasEdge;
use crate::graph::{DEFAULT_PORT, GraphEdge};

/// Rewrites one backend edge into the canvas shape.
///
/// The reserved default-input port is omitted on the target side, which the
/// editor reads as "default input". The source port is always preserved: a
/// default-output there is a condition node's unconditional fallthrough and
/// must stay visible. Edges whose endpoints are not in the graph are skipped
/// so the document stays renderable.
pub(super) fn convert_edge(edge: &GraphEdge, known_ids: &AHashSet<&str>) -> Option<CanvasEdge> {
    if !known_ids.contains(edge.source_node.as_str())
        || !known_ids.contains(edge.target_node.as_str())
    {
        warn!(
            source = edge.source_node.as_str(),
            target = edge.target_node.as_str(),
            "edge references a node outside the graph, skipping"
        );
        return None;
    }

    let target_port_id = if edge.target_port == DEFAULT_PORT {
        None
    } else {
        Some(edge.target_port.clone())
    };

    Some(CanvasEdge {
        source_node_id: edge.source_node.clone(),
        source_port_id: edge.source_port.clone(),
        target_node_id: edge.target_node.clone(),
        target_port_id,
    })
}
