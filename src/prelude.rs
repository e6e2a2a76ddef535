//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the henkan
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.

// Orchestrator and inference
pub use crate::convert::{PhaseAssignment, Translator, canvas_to_graph, infer_phases};

// Backend graph model
pub use crate::graph::{
    CONDITION_PREFIX, CallExpression, ConditionGroup, ConditionRecord, ConditionState,
    DEFAULT_PORT, GraphDefinition, GraphEdge, GraphNode, PortDefinition,
};

// Canvas document model
pub use crate::canvas::{
    CanvasDocument, CanvasEdge, CanvasNode, CanvasPayload, CanvasPort, FunctionMeta, LayoutHint,
    Position, Viewport, assign_position,
};

// Normalized conditions
pub use crate::condition::{
    ConditionValue, DEFAULT_GROUP, LiteralOperand, ParsedPredicate, PathOperand, Predicate,
    START_SCOPE, decode_group, encode_groups, parse_expression,
};

// Lookup tables
pub use crate::lookup::{CanvasKind, CompareOp, TokenTable, ValueType, is_combinator};

// Error types
pub use crate::error::ExpressionError;
