//! The orchestrator composing tables, inference, converters and layout into
//! one forward entry point, plus the thinner reverse path used on save.

mod edge;
mod node;
pub mod structure;

pub use structure::{PhaseAssignment, infer_phases};

use ahash::{AHashMap, AHashSet};
use tracing::{debug, error};

use crate::canvas::{
    CanvasDocument, CanvasNode, CanvasPayload, CanvasPort, LayoutHint, Viewport, assign_position,
};
use crate::condition::codec;
use crate::graph::{
    CallExpression, ConditionState, DEFAULT_PORT, GraphDefinition, GraphEdge, GraphNode,
    PortDefinition,
};
use crate::lookup::{CanvasKind, is_combinator};

/// Per-conversion scratch state, built fresh for every call and discarded on
/// return.
pub(crate) struct ConvertContext<'a> {
    pub start_outputs: &'a [CanvasPort],
    pub seen_unknown: AHashSet<String>,
}

/// Translates one backend graph document into a canvas document.
///
/// All configuration is injected through the builder; the translator stays
/// agnostic to where its input originated.
pub struct Translator {
    graph: GraphDefinition,
    start_outputs: Vec<CanvasPort>,
}

pub struct TranslatorBuilder {
    graph: GraphDefinition,
    start_outputs: Vec<CanvasPort>,
}

impl TranslatorBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            start_outputs: Vec::new(),
        }
    }

    /// Output schema for start nodes, as supplied by the entity/module
    /// property composer. Forwarded unmodified.
    pub fn with_start_outputs(mut self, outputs: Vec<CanvasPort>) -> Self {
        self.start_outputs = outputs;
        self
    }

    pub fn build(self) -> Translator {
        Translator {
            graph: self.graph,
            start_outputs: self.start_outputs,
        }
    }
}

impl Translator {
    pub fn builder(graph: GraphDefinition) -> TranslatorBuilder {
        TranslatorBuilder::new(graph)
    }

    pub fn graph(&self) -> &GraphDefinition {
        &self.graph
    }

    /// Forward conversion.
    ///
    /// Never fails: malformed predicates, unknown tokens and id-less nodes
    /// are recovered locally and logged, because the host has no fallback UI
    /// for a graph that refuses to load. The input is never mutated and every
    /// output structure is freshly allocated.
    pub fn to_canvas(&self) -> CanvasDocument {
        let mut ctx = ConvertContext {
            start_outputs: &self.start_outputs,
            seen_unknown: AHashSet::new(),
        };

        let mut known_ids: AHashSet<&str> = AHashSet::new();
        let mut keyed: Vec<(&str, &GraphNode)> = Vec::with_capacity(self.graph.nodes.len());
        for node in &self.graph.nodes {
            match node.id.as_deref() {
                Some(id) => {
                    known_ids.insert(id);
                    keyed.push((id, node));
                }
                None => error!(kind = node.kind.as_str(), "node without an id, dropping"),
            }
        }

        let phases = infer_phases(&self.graph.nodes, &self.graph.edges);
        let orders = order_hints(&keyed, &phases);

        let mut per_slot: AHashMap<(CanvasKind, u32), usize> = AHashMap::new();
        let mut nodes = Vec::with_capacity(keyed.len());
        for &(id, node) in &keyed {
            let kind = node::effective_kind(id, &node.kind, &mut ctx);
            let order = orders.get(id).copied().unwrap_or(0);
            let payload = node::convert_node(node, id, kind, order, &mut ctx);
            let index = per_slot.entry((kind, order)).or_insert(0);
            let position = assign_position(kind, order, *index);
            *index += 1;
            nodes.push(CanvasNode {
                id: id.to_string(),
                position,
                payload,
            });
        }

        let edges: Vec<_> = self
            .graph
            .edges
            .iter()
            .filter_map(|edge| edge::convert_edge(edge, &known_ids))
            .collect();

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "converted graph to canvas document"
        );

        CanvasDocument {
            nodes,
            edges,
            viewport: Viewport::default(),
            layout_hint: LayoutHint::Coarse,
        }
    }
}

/// Order hints drive the horizontal layout column: each combinator takes its
/// appearance index, contained nodes inherit it, everything else sits in the
/// first column.
fn order_hints(keyed: &[(&str, &GraphNode)], phases: &PhaseAssignment) -> AHashMap<String, u32> {
    let mut hints: AHashMap<String, u32> = AHashMap::new();
    let mut next = 0u32;
    for &(id, node) in keyed {
        if is_combinator(&node.kind) {
            hints.insert(id.to_string(), next);
            next += 1;
        }
    }
    for (phase, members) in &phases.children {
        if let Some(order) = hints.get(phase).copied() {
            for member in members {
                hints.insert(member.clone(), order);
            }
        }
    }
    hints
}

/// Reverse conversion for the save path.
///
/// Thinner by design: inferred nesting does not round-trip, only node and
/// edge identity and the per-node payload do.
pub fn canvas_to_graph(
    document: &CanvasDocument,
    id: &str,
    name: &str,
    kind: &str,
) -> GraphDefinition {
    let nodes = document.nodes.iter().map(reverse_node).collect();
    let edges = document
        .edges
        .iter()
        .map(|edge| GraphEdge {
            source_node: edge.source_node_id.clone(),
            source_port: edge.source_port_id.clone(),
            target_node: edge.target_node_id.clone(),
            target_port: edge
                .target_port_id
                .clone()
                .unwrap_or_else(|| DEFAULT_PORT.to_string()),
        })
        .collect();

    GraphDefinition {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        nodes,
        edges,
    }
}

fn reverse_node(node: &CanvasNode) -> GraphNode {
    let mut graph_node = GraphNode {
        id: Some(node.id.clone()),
        kind: node.kind().backend_kind().to_string(),
        inputs: Vec::new(),
        outputs: Vec::new(),
        condition_state: None,
        call_expression: None,
    };

    match &node.payload {
        CanvasPayload::Start { outputs } => {
            graph_node.outputs = outputs.iter().map(reverse_port).collect();
        }
        CanvasPayload::Invoke {
            function,
            inputs,
            outputs,
        } => {
            graph_node.inputs = inputs.iter().map(reverse_port).collect();
            graph_node.outputs = outputs.iter().map(reverse_port).collect();
            if function.id != node.id || function.body.is_some() {
                graph_node.call_expression = Some(CallExpression {
                    callee_id: function.id.clone(),
                    body: function.body.clone(),
                });
            }
        }
        CanvasPayload::Condition { predicates, .. } => {
            graph_node.condition_state =
                Some(ConditionState::Grouped(codec::encode_groups(predicates)));
        }
        CanvasPayload::Phase { backend_kind, .. } => {
            graph_node.kind = backend_kind.clone();
        }
    }

    graph_node
}

fn reverse_port(port: &CanvasPort) -> PortDefinition {
    PortDefinition {
        id: port.id.clone(),
        primitive_type: port.value_type.code().to_string(),
        name: port.name.clone(),
        description: port.description.clone(),
    }
}
