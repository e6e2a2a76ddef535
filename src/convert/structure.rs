//! Structural inference: reconstructing combinator nesting from a flat edge
//! list. The backend encodes hierarchy only through connectivity.

use ahash::{AHashMap, AHashSet};
use tracing::warn;

use crate::graph::{GraphEdge, GraphNode};
use crate::lookup::is_combinator;

/// Derived combinator containment.
///
/// Rebuilt fresh on every conversion and never cached: a stale assignment
/// after an external edit would silently corrupt the visual tree.
#[derive(Debug, Default)]
pub struct PhaseAssignment {
    /// Combinator id to ordered contained node ids.
    pub children: AHashMap<String, Vec<String>>,
    /// Nodes left outside every combinator, in input order.
    pub top_level: Vec<String>,
}

impl PhaseAssignment {
    /// The combinator containing `node_id`, if any.
    pub fn phase_of(&self, node_id: &str) -> Option<&str> {
        self.children.iter().find_map(|(phase, members)| {
            members
                .iter()
                .any(|member| member == node_id)
                .then_some(phase.as_str())
        })
    }
}

/// Assigns non-combinator nodes to their enclosing combinators.
///
/// One direct pass records every node a combinator points at; one propagation
/// pass extends the assignment to the direct children's own successors. The
/// propagation runs exactly once rather than to a fixed point, so nodes more
/// than two hops from their combinator stay in the top-level set. Consumers
/// depend on the truncated result, so the gap is surfaced as a warning
/// instead of being closed.
pub fn infer_phases(nodes: &[GraphNode], edges: &[GraphEdge]) -> PhaseAssignment {
    let mut combinators: AHashSet<&str> = AHashSet::new();
    let mut unassigned: AHashSet<&str> = AHashSet::new();
    let mut input_order: Vec<&str> = Vec::new();

    for node in nodes {
        let Some(id) = node.id.as_deref() else {
            continue;
        };
        if is_combinator(&node.kind) {
            combinators.insert(id);
        } else {
            unassigned.insert(id);
            input_order.push(id);
        }
    }

    let mut children: AHashMap<String, Vec<String>> = AHashMap::new();
    let mut assigned_to: AHashMap<&str, String> = AHashMap::new();

    // Direct pass: a combinator's immediate successors become its children.
    for edge in edges {
        let source = edge.source_node.as_str();
        let target = edge.target_node.as_str();
        if combinators.contains(source) && unassigned.remove(target) {
            children
                .entry(source.to_string())
                .or_default()
                .push(target.to_string());
            assigned_to.insert(target, source.to_string());
        }
    }

    // One propagation pass, extending only from the direct children recorded
    // above. A node assigned here does not propagate further.
    let direct = assigned_to.clone();
    for edge in edges {
        let source = edge.source_node.as_str();
        let target = edge.target_node.as_str();
        if let Some(phase) = direct.get(source) {
            if unassigned.remove(target) {
                children
                    .entry(phase.clone())
                    .or_default()
                    .push(target.to_string());
                assigned_to.insert(target, phase.clone());
            }
        }
    }

    // Anything a deeper pass would have captured is a structural gap.
    for edge in edges {
        let source = edge.source_node.as_str();
        let target = edge.target_node.as_str();
        if let Some(phase) = assigned_to.get(source) {
            if unassigned.contains(target) {
                warn!(
                    node = target,
                    phase = phase.as_str(),
                    "node more than two hops from its combinator, leaving at top level"
                );
            }
        }
    }

    let top_level = input_order
        .into_iter()
        .filter(|id| unassigned.contains(id))
        .map(str::to_string)
        .collect();

    PhaseAssignment {
        children,
        top_level,
    }
}
