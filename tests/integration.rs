//! End-to-end tests: backend JSON in, canvas document out, and back again.
mod common;
use henkan::prelude::*;

const GRAPH_JSON: &str = r#"{
  "id": "wf-7",
  "name": "Sorting line",
  "kind": "behavior",
  "nodes": [
    { "id": "root", "kind": "nest" },
    { "id": "seq-main", "kind": "sequence" },
    {
      "id": "condition-TooFast",
      "kind": "condition",
      "conditionState": {
        "id": "g1",
        "conditions": [
          {
            "segments": ["speed"],
            "value": "10",
            "compareOperator": "GREATER_THAN",
            "negation": false
          }
        ]
      }
    },
    {
      "id": "act-stop",
      "kind": "invoke",
      "callExpression": { "calleeId": "conveyor/stop" },
      "inputs": [{ "id": "default", "primitiveType": "u", "name": "in" }]
    }
  ],
  "edges": [
    { "sourceNode": "root", "sourcePort": "default", "targetNode": "seq-main", "targetPort": "default" },
    { "sourceNode": "seq-main", "sourcePort": "default", "targetNode": "condition-TooFast", "targetPort": "default" },
    { "sourceNode": "condition-TooFast", "sourcePort": "yes", "targetNode": "act-stop", "targetPort": "default" }
  ]
}"#;

#[test]
fn test_full_document_converts_and_serializes() {
    let graph: GraphDefinition = serde_json::from_str(GRAPH_JSON).unwrap();
    let document = Translator::builder(graph).build().to_canvas();

    // Every backend node id appears as exactly one visual node id.
    assert_eq!(document.nodes.len(), 4);
    for id in ["root", "seq-main", "condition-TooFast", "act-stop"] {
        assert_eq!(document.nodes.iter().filter(|n| n.id == id).count(), 1);
    }

    let rendered = serde_json::to_string(&document).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["layoutHint"], "coarse");
    assert_eq!(value["viewport"]["zoom"], 1.0);

    let nodes = value["nodes"].as_array().unwrap();
    let cond = nodes
        .iter()
        .find(|n| n["id"] == "condition-TooFast")
        .unwrap();
    assert_eq!(cond["kind"], "condition");
    assert_eq!(cond["data"]["title"], "TooFast");
    // The unmapped operator fell back to eq and the path grew the start scope.
    assert_eq!(cond["data"]["predicates"][0]["group"], "g1");
    assert_eq!(cond["data"]["predicates"][0]["value"]["operator"], "eq");
    assert_eq!(
        cond["data"]["predicates"][0]["value"]["left"]["content"],
        serde_json::json!(["$start", "speed"])
    );

    let act = nodes.iter().find(|n| n["id"] == "act-stop").unwrap();
    assert_eq!(act["kind"], "invoke");
    assert_eq!(act["data"]["function"]["id"], "conveyor/stop");
    // The reserved default input was dropped, the synthetic output injected.
    assert_eq!(act["data"]["inputs"].as_array().unwrap().len(), 0);
    assert_eq!(act["data"]["outputs"][0]["id"], "default");

    let edges = value["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    // Default target ports are omitted, meaningful source ports preserved.
    assert!(edges.iter().all(|e| e.get("targetPortId").is_none()));
    assert_eq!(edges[2]["sourcePortId"], "yes");
}

#[test]
fn test_reverse_path_restores_identity_and_defaults() {
    let graph: GraphDefinition = serde_json::from_str(GRAPH_JSON).unwrap();
    let document = Translator::builder(graph).build().to_canvas();
    let restored = canvas_to_graph(&document, "wf-7", "Sorting line", "behavior");

    assert_eq!(restored.id, "wf-7");
    assert_eq!(restored.nodes.len(), 4);

    let by_id = |id: &str| {
        restored
            .nodes
            .iter()
            .find(|n| n.id.as_deref() == Some(id))
            .unwrap()
    };
    assert_eq!(by_id("root").kind, "nest");
    assert_eq!(by_id("seq-main").kind, "sequence");
    assert_eq!(by_id("condition-TooFast").kind, "condition");

    let act = by_id("act-stop");
    assert_eq!(act.kind, "invoke");
    assert_eq!(
        act.call_expression.as_ref().unwrap().callee_id,
        "conveyor/stop"
    );

    let cond = by_id("condition-TooFast");
    let state = cond.condition_state.as_ref().unwrap();
    let groups = state.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, "g1");
    assert_eq!(groups[0].conditions[0].segments, vec!["speed".to_string()]);

    assert_eq!(restored.edges.len(), 3);
    assert!(
        restored
            .edges
            .iter()
            .all(|edge| edge.target_port == DEFAULT_PORT)
    );
}

#[test]
fn test_reverse_grouping_preserves_first_appearance_order() {
    let predicates = vec![
        Predicate {
            group: "b".to_string(),
            value: ConditionValue::placeholder(),
        },
        Predicate {
            group: "a".to_string(),
            value: ConditionValue::placeholder(),
        },
        Predicate {
            group: "b".to_string(),
            value: ConditionValue::placeholder(),
        },
    ];
    let groups = encode_groups(&predicates);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, "b");
    assert_eq!(groups[0].conditions.len(), 2);
    assert_eq!(groups[1].id, "a");
    assert_eq!(groups[1].conditions[0].compare_operator, "NOT_EMPTY");
}

#[test]
fn test_synthetic_invoke_function_id_is_not_written_back_as_a_call() {
    let graph = common::graph(vec![common::node("plain", "invoke")], vec![]);
    let document = Translator::builder(graph).build().to_canvas();
    let restored = canvas_to_graph(&document, "g1", "Test graph", "behavior");
    // The function id equals the node id, so no call expression is invented.
    assert!(restored.nodes[0].call_expression.is_none());
}
