//! Common test utilities for building flow graphs and wire documents.
use flowscope::prelude::*;

/// Shorthand node constructor; most tests only care about id and kind.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn var(name: &str) -> VarDecl {
    VarDecl {
        name: name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        ..Default::default()
    }
}

/// `start -> greet(user_name) -> ask_age(age) -> end`
#[allow(dead_code)]
pub fn linear_flow() -> FlowGraph {
    let mut start = node("start", NodeKind::Start);
    start.is_start = true;
    let mut greet = node("greet", NodeKind::Message);
    greet.extract_vars.push(var("user_name"));
    let mut ask_age = node("ask_age", NodeKind::Extraction);
    ask_age.extract_vars.push(var("age"));
    let end = node("end", NodeKind::End);

    FlowGraph::new(
        vec![start, greet, ask_age, end],
        vec![
            edge("e1", "start", "greet"),
            edge("e2", "greet", "ask_age"),
            edge("e3", "ask_age", "end"),
        ],
    )
}

/// The linear flow plus a retry edge from `ask_age` back to `greet`,
/// labeled "missing info" and flagged as an else transition.
#[allow(dead_code)]
pub fn looping_flow() -> FlowGraph {
    let mut graph = linear_flow();
    let mut retry = edge("e4", "ask_age", "greet");
    retry.label = "missing info".to_string();
    retry.else_option = true;
    graph.edges.push(retry);
    graph
}

/// Two branches from the entry that both declare `email`, then rejoin:
/// `start -> {left(email), right(email, phone)} -> join`.
#[allow(dead_code)]
pub fn branching_flow() -> FlowGraph {
    let mut start = node("start", NodeKind::Start);
    start.is_start = true;
    let mut left = node("left", NodeKind::Extraction);
    left.extract_vars.push(var("email"));
    let mut right = node("right", NodeKind::Extraction);
    right.extract_vars.push(var("email"));
    right.extract_vars.push(var("phone"));
    let join = node("join", NodeKind::Summary);

    FlowGraph::new(
        vec![start, left, right, join],
        vec![
            edge("e1", "start", "left"),
            edge("e2", "start", "right"),
            edge("e3", "left", "join"),
            edge("e4", "right", "join"),
        ],
    )
}

/// An engine-format document with a flagged retry edge and one node of an
/// unknown future type, to exercise defaulting on import.
#[allow(dead_code)]
pub const ENGINE_FLOW_JSON: &str = r#"{
    "first_node_id": "n1",
    "global_objective": "Collect shipping details",
    "global_tone": "friendly",
    "global_language": "English only",
    "global_behaviour": "Never promise delivery dates",
    "global_values": "city, street",
    "nodes": [
        {
            "id": "n1",
            "node_type": "start",
            "is_start": true,
            "use_llm": false
        },
        {
            "id": "n2",
            "node_type": "extraction",
            "prompt": {
                "context": "The user wants a delivery",
                "objective": "Ask for the destination city",
                "custom_fields": { "tone": "friendly" }
            },
            "extract_vars": [
                { "name": "city", "var_type": "string", "required": true }
            ],
            "use_llm": true,
            "temperature": 0.7
        },
        {
            "id": "n3",
            "node_type": "unknown_future_type",
            "prompt": { "objective": "Confirm the collected address" },
            "use_llm": true
        },
        {
            "id": "n4",
            "node_type": "end",
            "is_end": true,
            "use_llm": false
        }
    ],
    "connections": [
        { "id": "c1", "source": "n1", "target": "n2", "label": "begin", "description": "", "else_option": false },
        { "id": "c2", "source": "n2", "target": "n3", "label": "got city", "description": "city captured", "else_option": false },
        { "id": "c3", "source": "n3", "target": "n2", "label": "missing info", "description": "city still missing", "else_option": true },
        { "id": "c4", "source": "n3", "target": "n4", "label": "done", "description": "all set", "else_option": false }
    ]
}"#;

/// An editor-format document with hand-arranged positions.
#[allow(dead_code)]
pub const EDITOR_FLOW_JSON: &str = r#"{
    "globalConfig": {
        "globalPrompt": "",
        "roleAndObjective": "Book a table",
        "toneAndStyle": "casual",
        "languageAndFormatRules": "German",
        "behaviorAndFallbacks": "Escalate twice, then hand over",
        "placeholdersAndVariables": "guests, time"
    },
    "nodes": [
        {
            "id": "a",
            "type": "start",
            "position": { "x": 0, "y": 0 },
            "data": { "name": "Start", "isStart": true }
        },
        {
            "id": "b",
            "type": "extraction",
            "position": { "x": 12.5, "y": 230 },
            "data": {
                "name": "Guests",
                "prompt": { "objective": "Ask how many guests" },
                "extractVars": [
                    { "name": "guests", "varType": "int", "description": "party size", "required": true }
                ],
                "modelOptions": { "temperature": 0.1, "skipUserResponse": false }
            }
        },
        {
            "id": "c",
            "type": "end",
            "position": { "x": 50, "y": 460 },
            "data": { "name": "End" }
        }
    ],
    "edges": [
        { "id": "e1", "source": "a", "target": "b", "label": "go", "data": { "description": "", "else_option": false } },
        { "id": "e2", "source": "b", "target": "c", "label": "done", "data": { "description": "guests known", "else_option": false } }
    ]
}"#;
