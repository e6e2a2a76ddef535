//! Tests for combinator containment inference.
mod common;
use common::*;
use henkan::prelude::*;

#[test]
fn test_direct_children_are_recorded_in_edge_order() {
    let nodes = vec![
        node("seq1", "sequence"),
        node("a", "invoke"),
        node("b", "invoke"),
    ];
    let edges = vec![edge("seq1", "a"), edge("seq1", "b")];

    let phases = infer_phases(&nodes, &edges);
    assert_eq!(
        phases.children["seq1"],
        vec!["a".to_string(), "b".to_string()]
    );
    assert!(phases.top_level.is_empty());
    assert_eq!(phases.phase_of("a"), Some("seq1"));
}

#[test]
fn test_two_hop_chains_truncate_at_the_one_pass_limit() {
    // seq1 -> cond1 -> act1 -> act2: act1 sits two hops out, act2 three.
    let nodes = vec![
        node("seq1", "sequence"),
        node("cond1", "condition"),
        node("act1", "invoke"),
        node("act2", "invoke"),
    ];
    let edges = vec![
        edge("seq1", "cond1"),
        edge("cond1", "act1"),
        edge("act1", "act2"),
    ];

    let phases = infer_phases(&nodes, &edges);
    assert_eq!(
        phases.children["seq1"],
        vec!["cond1".to_string(), "act1".to_string()]
    );
    assert_eq!(phases.top_level, vec!["act2".to_string()]);
    assert_eq!(phases.phase_of("act2"), None);
}

#[test]
fn test_combinators_are_never_recorded_as_children() {
    let nodes = vec![
        node("seq1", "sequence"),
        node("par1", "parallel"),
        node("a", "invoke"),
    ];
    let edges = vec![edge("seq1", "par1"), edge("par1", "a")];

    let phases = infer_phases(&nodes, &edges);
    assert!(!phases.children.contains_key("seq1"));
    assert_eq!(phases.children["par1"], vec!["a".to_string()]);
}

#[test]
fn test_first_assignment_wins_when_two_combinators_share_a_node() {
    let nodes = vec![
        node("seq1", "sequence"),
        node("fb1", "fallback"),
        node("a", "invoke"),
    ];
    let edges = vec![edge("seq1", "a"), edge("fb1", "a")];

    let phases = infer_phases(&nodes, &edges);
    assert_eq!(phases.children["seq1"], vec!["a".to_string()]);
    assert!(!phases.children.contains_key("fb1"));
}

#[test]
fn test_recorded_children_sit_within_two_hops_of_their_combinator() {
    let nodes = vec![
        node("seq1", "sequence"),
        node("par1", "parallel"),
        node("a", "invoke"),
        node("b", "invoke"),
        node("c", "invoke"),
        node("d", "invoke"),
    ];
    let edges = vec![
        edge("seq1", "a"),
        edge("a", "b"),
        edge("b", "c"),
        edge("par1", "d"),
    ];

    let phases = infer_phases(&nodes, &edges);
    for (phase, members) in &phases.children {
        for member in members {
            let direct = edges
                .iter()
                .any(|e| &e.source_node == phase && &e.target_node == member);
            let two_hop = edges.iter().any(|e| {
                &e.target_node == member
                    && edges
                        .iter()
                        .any(|f| &f.source_node == phase && f.target_node == e.source_node)
            });
            assert!(
                direct || two_hop,
                "'{}' recorded under '{}' without a path of length <= 2",
                member,
                phase
            );
        }
    }
    // The three-hop node is not a recorded child anywhere.
    assert!(phases.top_level.contains(&"c".to_string()));
}

#[test]
fn test_unconnected_nodes_stay_top_level_in_input_order() {
    let nodes = vec![node("x", "invoke"), node("y", "condition")];
    let phases = infer_phases(&nodes, &[]);
    assert!(phases.children.is_empty());
    assert_eq!(phases.top_level, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_empty_graph_yields_an_empty_assignment() {
    let phases = infer_phases(&[], &[]);
    assert!(phases.children.is_empty());
    assert!(phases.top_level.is_empty());
}
