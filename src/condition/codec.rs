//! The condition expression codec.
//!
//! `decode_group` is the ingestion boundary for both physical predicate
//! shapes; `encode_groups` is its thinner counterpart for the save path.

use ahash::AHashSet;
use itertools::Itertools;
use tracing::warn;

use super::parser::parse_expression;
use super::{ConditionValue, DEFAULT_GROUP, LiteralOperand, PathOperand, Predicate, START_SCOPE};
use crate::graph::{ConditionGroup, ConditionRecord};
use crate::lookup::{CompareOp, resolve_or_fallback};

/// Normalizes one predicate group into tagged predicates.
///
/// Structured records take precedence; the legacy free-text expression is
/// used only when no records are present. Record order is preserved so the
/// editor diffs deterministically.
pub fn decode_group(group: &ConditionGroup, seen: &mut AHashSet<String>) -> Vec<Predicate> {
    let tag = group_tag(group);
    if !group.conditions.is_empty() {
        return group
            .conditions
            .iter()
            .map(|record| Predicate {
                group: tag.clone(),
                value: decode_record(record, seen),
            })
            .collect();
    }
    match &group.expression {
        Some(expression) => decode_expression(expression, &tag, seen),
        None => Vec::new(),
    }
}

/// Regroups canvas predicates into structured backend records. Group order
/// follows first appearance; record order within a group is preserved.
pub fn encode_groups(predicates: &[Predicate]) -> Vec<ConditionGroup> {
    let order: Vec<&str> = predicates
        .iter()
        .map(|predicate| predicate.group.as_str())
        .unique()
        .collect();
    let mut grouped = predicates
        .iter()
        .map(|predicate| (predicate.group.as_str(), encode_record(&predicate.value)))
        .into_group_map();
    order
        .into_iter()
        .map(|tag| ConditionGroup {
            id: tag.to_string(),
            conditions: grouped.remove(tag).unwrap_or_default(),
            expression: None,
        })
        .collect()
}

fn group_tag(group: &ConditionGroup) -> String {
    if group.id.is_empty() {
        DEFAULT_GROUP.to_string()
    } else {
        group.id.clone()
    }
}

/// Structured form: the segment list is used directly and the literal is
/// carried verbatim.
fn decode_record(record: &ConditionRecord, seen: &mut AHashSet<String>) -> ConditionValue {
    let mut operator: CompareOp = resolve_or_fallback(&record.compare_operator, seen);
    if record.partial_match {
        operator = CompareOp::Match;
    }
    if record.negation {
        operator = operator.negate();
    }

    let mut content = Vec::with_capacity(record.segments.len() + 1);
    content.push(START_SCOPE.to_string());
    content.extend(record.segments.iter().cloned());

    ConditionValue {
        left: PathOperand { content },
        operator,
        right: LiteralOperand {
            content: record.value.clone(),
        },
    }
}

/// Legacy form: one comparison per expression, field path split on `/`. A
/// parse failure yields zero predicates for the group; callers treat "no
/// predicate" as "always true" rather than aborting the conversion.
fn decode_expression(
    expression: &str,
    tag: &str,
    seen: &mut AHashSet<String>,
) -> Vec<Predicate> {
    let parsed = match parse_expression(expression) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(%error, expression, "malformed textual predicate, dropping group");
            return Vec::new();
        }
    };

    let mut operator: CompareOp = resolve_or_fallback(&parsed.operator, seen);
    if parsed.negated {
        operator = operator.negate();
    }

    let mut content = vec![START_SCOPE.to_string()];
    content.extend(parsed.path.split('/').map(str::to_string));

    vec![Predicate {
        group: tag.to_string(),
        value: ConditionValue {
            left: PathOperand { content },
            operator,
            right: LiteralOperand {
                content: parsed.value,
            },
        },
    }]
}

fn encode_record(value: &ConditionValue) -> ConditionRecord {
    let (token, negation, partial_match) = value.operator.to_backend();
    let segments = match value.left.content.split_first() {
        Some((first, rest)) if first == START_SCOPE => rest.to_vec(),
        _ => value.left.content.clone(),
    };
    ConditionRecord {
        segments,
        value: value.right.content.clone(),
        compare_operator: token.to_string(),
        negation,
        partial_match,
    }
}
