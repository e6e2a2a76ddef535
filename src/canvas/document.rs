//! The visual workflow document consumed by the drag-and-drop editing surface.

use serde::{Deserialize, Serialize};

use crate::condition::Predicate;
use crate::lookup::{CanvasKind, ValueType};

/// The node/edge/viewport structure the rendering framework loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDocument {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub layout_hint: LayoutHint,
}

/// A node on the canvas. Identity is preserved from the originating backend
/// node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    pub position: Position,
    #[serde(flatten)]
    pub payload: CanvasPayload,
}

impl CanvasNode {
    pub fn kind(&self) -> CanvasKind {
        match self.payload {
            CanvasPayload::Start { .. } => CanvasKind::Start,
            CanvasPayload::Invoke { .. } => CanvasKind::Invoke,
            CanvasPayload::Condition { .. } => CanvasKind::Condition,
            CanvasPayload::Phase { .. } => CanvasKind::Phase,
        }
    }
}

/// Kind-specific node payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "data",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum CanvasPayload {
    Start {
        outputs: Vec<CanvasPort>,
    },
    Invoke {
        function: FunctionMeta,
        inputs: Vec<CanvasPort>,
        outputs: Vec<CanvasPort>,
    },
    Condition {
        title: String,
        predicates: Vec<Predicate>,
    },
    Phase {
        backend_kind: String,
        order: u32,
    },
}

/// Call metadata for an invoke node. The id falls back to the node id when
/// the backend carried no call expression, keeping the node addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMeta {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A typed canvas port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasPort {
    pub id: String,
    pub value_type: ValueType,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A canvas edge. An absent target port means the default input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEdge {
    pub source_node_id: String,
    pub source_port_id: String,
    pub target_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port_id: Option<String>,
}

/// 2D canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Visible canvas region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Whether node positions are provisional or author-placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
    /// Placement only avoids total overlap; the renderer should run its own
    /// layout pass after load.
    #[default]
    Coarse,
    /// Positions were placed by hand and must be kept.
    Manual,
}
