//! The bidirectional kind, primitive-type and operator tables.
//!
//! Every table is a pure, total lookup with an explicit fallback default, so a
//! document produced by a newer backend version still converts into something
//! the canvas can render. The fallback policy lives here and nowhere else.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Visual node kinds, the image of the backend kind table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasKind {
    Start,
    Invoke,
    Condition,
    Phase,
}

/// Primitive value types attached to canvas ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
}

/// Comparison operators as the canvas editor understands them.
///
/// `NotContains` and `NotAmong` have no backend token of their own and are
/// reachable only as negation images; `Match` is reachable only through the
/// `partialMatch` flag on structured predicate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareOp {
    Empty,
    NotEmpty,
    Eq,
    Neq,
    Contains,
    NotContains,
    Among,
    NotAmong,
    Match,
}

/// A token table with an explicit fallback default.
///
/// `from_token` is the pure lookup; the crate-internal `resolve_or_fallback`
/// wraps it with the shared unknown-value branch.
pub trait TokenTable: Sized + Copy {
    /// Table name used in diagnostics.
    const TABLE: &'static str;
    /// The value every unrecognized token maps to.
    const FALLBACK: Self;

    fn from_token(token: &str) -> Option<Self>;
}

impl TokenTable for CanvasKind {
    const TABLE: &'static str = "node-kind";
    // Unknown future kinds still render as an actionable node.
    const FALLBACK: Self = CanvasKind::Invoke;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "nest" => Some(CanvasKind::Start),
            "invoke" => Some(CanvasKind::Invoke),
            "condition" => Some(CanvasKind::Condition),
            "sequence" | "fallback" | "parallel" => Some(CanvasKind::Phase),
            _ => None,
        }
    }
}

impl TokenTable for ValueType {
    const TABLE: &'static str = "primitive-type";
    const FALLBACK: Self = ValueType::String;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "s" => Some(ValueType::String),
            "n" => Some(ValueType::Number),
            "b" => Some(ValueType::Boolean),
            "u" => Some(ValueType::Object),
            _ => None,
        }
    }
}

impl TokenTable for CompareOp {
    const TABLE: &'static str = "operator";
    const FALLBACK: Self = CompareOp::Eq;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "EMPTY" => Some(CompareOp::Empty),
            "NOT_EMPTY" => Some(CompareOp::NotEmpty),
            "EQUALS" => Some(CompareOp::Eq),
            "NOT_EQUALS" => Some(CompareOp::Neq),
            "CONTAINS" => Some(CompareOp::Contains),
            "AMONG" => Some(CompareOp::Among),
            _ => None,
        }
    }
}

/// Resolves a token through its table, falling back to the table default.
/// Each distinct unknown token is logged at most once per conversion.
pub(crate) fn resolve_or_fallback<T: TokenTable>(token: &str, seen: &mut AHashSet<String>) -> T {
    match T::from_token(token) {
        Some(value) => value,
        None => {
            if seen.insert(format!("{}:{}", T::TABLE, token)) {
                warn!(
                    table = T::TABLE,
                    token, "unrecognized token, using table fallback"
                );
            }
            T::FALLBACK
        }
    }
}

impl CompareOp {
    /// Swaps the operator for its defined complement.
    ///
    /// `Match` has no complement and passes through unchanged, so a negated
    /// partial match cannot be distinguished from a plain one after
    /// conversion.
    pub fn negate(self) -> Self {
        match self {
            CompareOp::Empty => CompareOp::NotEmpty,
            CompareOp::NotEmpty => CompareOp::Empty,
            CompareOp::Eq => CompareOp::Neq,
            CompareOp::Neq => CompareOp::Eq,
            CompareOp::Contains => CompareOp::NotContains,
            CompareOp::NotContains => CompareOp::Contains,
            CompareOp::Among => CompareOp::NotAmong,
            CompareOp::NotAmong => CompareOp::Among,
            CompareOp::Match => CompareOp::Match,
        }
    }

    /// Factors the operator back into the backend encoding:
    /// `(token, negated, partial_match)`.
    pub fn to_backend(self) -> (&'static str, bool, bool) {
        match self {
            CompareOp::Empty => ("EMPTY", false, false),
            CompareOp::NotEmpty => ("NOT_EMPTY", false, false),
            CompareOp::Eq => ("EQUALS", false, false),
            CompareOp::Neq => ("NOT_EQUALS", false, false),
            CompareOp::Contains => ("CONTAINS", false, false),
            CompareOp::NotContains => ("CONTAINS", true, false),
            CompareOp::Among => ("AMONG", false, false),
            CompareOp::NotAmong => ("AMONG", true, false),
            CompareOp::Match => ("EQUALS", false, true),
        }
    }
}

impl CanvasKind {
    /// The backend kind written on save. `Phase` nodes carry their backend
    /// kind verbatim in the payload, which takes precedence over this default.
    pub fn backend_kind(self) -> &'static str {
        match self {
            CanvasKind::Start => "nest",
            CanvasKind::Invoke => "invoke",
            CanvasKind::Condition => "condition",
            CanvasKind::Phase => "sequence",
        }
    }
}

impl ValueType {
    /// The single-letter code the backend uses for this type.
    pub fn code(self) -> &'static str {
        match self {
            ValueType::String => "s",
            ValueType::Number => "n",
            ValueType::Boolean => "b",
            ValueType::Object => "u",
        }
    }
}

/// Whether a backend kind is a structural combinator: a node that groups
/// children and performs no action itself.
pub fn is_combinator(kind: &str) -> bool {
    matches!(kind, "sequence" | "fallback" | "parallel")
}
