//! Normalization of backend predicates into one canvas-side condition shape.
//!
//! The backend has shipped two physical encodings of the same logical
//! concept: a legacy free-text expression and a structured record list. Both
//! are folded into [`Predicate`] values here, so nothing downstream ever
//! branches on the source shape.

pub mod codec;
pub mod parser;

pub use codec::*;
pub use parser::*;

use serde::{Deserialize, Serialize};

use crate::lookup::CompareOp;

/// Token the visual editor roots every variable path at.
pub const START_SCOPE: &str = "$start";

/// Group tag for predicates whose owning group has no name, which is the case
/// for every legacy document that predates grouping.
pub const DEFAULT_GROUP: &str = "default";

/// One normalized boolean predicate: reference, operator, literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionValue {
    pub left: PathOperand,
    pub operator: CompareOp,
    pub right: LiteralOperand,
}

impl ConditionValue {
    /// The row emitted when a condition node arrives without any predicates:
    /// a non-empty check against an empty literal, which the editor renders
    /// as an editable stub.
    pub fn placeholder() -> Self {
        Self {
            left: PathOperand {
                content: vec![START_SCOPE.to_string()],
            },
            operator: CompareOp::NotEmpty,
            right: LiteralOperand {
                content: serde_json::Value::String(String::new()),
            },
        }
    }
}

/// A variable path rooted at [`START_SCOPE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathOperand {
    pub content: Vec<String>,
}

/// A literal carried verbatim from the backend document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralOperand {
    pub content: serde_json::Value,
}

/// A predicate tagged with its owning group. The tag is the signal the editor
/// uses to route mutually exclusive branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub group: String,
    pub value: ConditionValue,
}
