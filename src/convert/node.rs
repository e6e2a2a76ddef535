//! Per-kind conversion of backend nodes into canvas payloads.

use crate::canvas::{CanvasPayload, CanvasPort, FunctionMeta};
use crate::condition::{ConditionValue, DEFAULT_GROUP, Predicate, codec};
use crate::graph::{CONDITION_PREFIX, DEFAULT_PORT, GraphNode, PortDefinition};
use crate::lookup::{CanvasKind, ValueType, resolve_or_fallback};

use super::ConvertContext;

/// The kind a node converts under: the table image of its declared kind,
/// except that ids in the condition namespace are forced to `Condition`.
/// Some backend versions mistag condition nodes.
pub(super) fn effective_kind(id: &str, declared: &str, ctx: &mut ConvertContext<'_>) -> CanvasKind {
    if id.starts_with(CONDITION_PREFIX) {
        CanvasKind::Condition
    } else {
        resolve_or_fallback(declared, &mut ctx.seen_unknown)
    }
}

pub(super) fn convert_node(
    node: &GraphNode,
    id: &str,
    kind: CanvasKind,
    order: u32,
    ctx: &mut ConvertContext<'_>,
) -> CanvasPayload {
    match kind {
        CanvasKind::Start => CanvasPayload::Start {
            // Populated by the property composer only, never invented here.
            outputs: ctx.start_outputs.to_vec(),
        },
        CanvasKind::Invoke => convert_invoke(node, id, ctx),
        CanvasKind::Condition => convert_condition(node, id, ctx),
        CanvasKind::Phase => CanvasPayload::Phase {
            backend_kind: node.kind.clone(),
            order,
        },
    }
}

fn convert_invoke(node: &GraphNode, id: &str, ctx: &mut ConvertContext<'_>) -> CanvasPayload {
    let function = match &node.call_expression {
        Some(call) => FunctionMeta {
            id: call.callee_id.clone(),
            body: call.body.clone(),
        },
        // A missing call expression still leaves the node addressable.
        None => FunctionMeta {
            id: id.to_string(),
            body: None,
        },
    };

    let inputs = node
        .inputs
        .iter()
        .filter(|port| port.id != DEFAULT_PORT)
        .map(|port| convert_port(port, ctx))
        .collect();

    let mut outputs: Vec<CanvasPort> = node
        .outputs
        .iter()
        .map(|port| convert_port(port, ctx))
        .collect();
    if outputs.is_empty() {
        outputs.push(synthetic_output());
    }

    CanvasPayload::Invoke {
        function,
        inputs,
        outputs,
    }
}

fn convert_condition(node: &GraphNode, id: &str, ctx: &mut ConvertContext<'_>) -> CanvasPayload {
    let mut predicates: Vec<Predicate> = node
        .condition_state
        .as_ref()
        .map(|state| {
            state
                .groups()
                .iter()
                .flat_map(|group| codec::decode_group(group, &mut ctx.seen_unknown))
                .collect()
        })
        .unwrap_or_default();
    if predicates.is_empty() {
        // The editor requires at least one row.
        predicates.push(Predicate {
            group: DEFAULT_GROUP.to_string(),
            value: ConditionValue::placeholder(),
        });
    }

    let title = id.strip_prefix(CONDITION_PREFIX).unwrap_or(id).to_string();

    CanvasPayload::Condition { title, predicates }
}

fn convert_port(port: &PortDefinition, ctx: &mut ConvertContext<'_>) -> CanvasPort {
    CanvasPort {
        id: port.id.clone(),
        value_type: resolve_or_fallback(&port.primitive_type, &mut ctx.seen_unknown),
        name: port.name.clone(),
        description: port.description.clone(),
    }
}

/// Injected when a backend invoke node declares no outputs at all, so no
/// invoke node ends up unconnectable.
fn synthetic_output() -> CanvasPort {
    CanvasPort {
        id: DEFAULT_PORT.to_string(),
        value_type: ValueType::Object,
        name: "output".to_string(),
        description: String::new(),
    }
}
