use clap::Parser;
use flowscope::convert::{EditorEdge, EditorExtractVar, EditorFlow, EditorNode, EditorNodeData};
use flowscope::prelude::*;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

/// A CLI tool to generate randomized editor flows for layout and scoping
/// stress runs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of content nodes between the start and end markers
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Chance (0-100) that a node declares an extracted variable
    #[arg(long, default_value_t = 60)]
    var_chance: u32,

    /// Chance (0-100) that a node gets a retry edge back to its predecessor
    #[arg(long, default_value_t = 25)]
    loop_chance: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.var_chance > 100 || cli.loop_chance > 100 {
        eprintln!("Error: --var-chance and --loop-chance are percentages (0-100)");
        std::process::exit(1);
    }

    let mut rng = rand::rng();

    println!("Generating editor flow with {} content node(s)...", cli.nodes);
    let flow = generate_flow(&mut rng, cli.nodes, cli.var_chance, cli.loop_chance);

    let json_output = serde_json::to_string_pretty(&flow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved flow to '{}' ({} nodes, {} edges)",
        cli.output,
        flow.nodes.len(),
        flow.edges.len()
    );

    Ok(())
}

/// Builds a linear flow with randomized node kinds, variable declarations
/// and retry edges, then lays it out so the file opens cleanly in the
/// editor.
fn generate_flow(
    rng: &mut ThreadRng,
    content_nodes: usize,
    var_chance: u32,
    loop_chance: u32,
) -> EditorFlow {
    const CONTENT_KINDS: [NodeKind; 5] = [
        NodeKind::Message,
        NodeKind::Extraction,
        NodeKind::Validation,
        NodeKind::Request,
        NodeKind::Normal,
    ];
    const VAR_KINDS: [VarKind; 4] = [
        VarKind::String,
        VarKind::Int,
        VarKind::Float,
        VarKind::Boolean,
    ];

    let mut nodes = Vec::with_capacity(content_nodes + 2);
    let mut edges = Vec::new();

    nodes.push(make_node("start", NodeKind::Start, true));
    for index in 0..content_nodes {
        let kind = CONTENT_KINDS[rng.random_range(0..CONTENT_KINDS.len())];
        let mut node = make_node(&format!("node_{}", index), kind, false);
        node.data.name = Some(format!("Step {}", index + 1));
        if rng.random_range(0..100) < var_chance {
            node.data.extract_vars.push(EditorExtractVar {
                name: format!("var_{}", index),
                kind: VAR_KINDS[rng.random_range(0..VAR_KINDS.len())],
                ..Default::default()
            });
        }
        nodes.push(node);
    }
    nodes.push(make_node("end", NodeKind::End, false));

    // The forward chain.
    for pair in 0..nodes.len() - 1 {
        edges.push(EditorEdge {
            id: format!("edge_{}", pair),
            source: nodes[pair].id.clone(),
            target: nodes[pair + 1].id.clone(),
            label: "next".to_string(),
            ..Default::default()
        });
    }

    // Retry edges between content nodes only.
    for index in 1..content_nodes {
        if rng.random_range(0..100) < loop_chance {
            let mut retry = EditorEdge {
                id: format!("retry_{}", index),
                source: format!("node_{}", index),
                target: format!("node_{}", index - 1),
                label: "missing info".to_string(),
                edge_type: Some("loopback".to_string()),
                animated: true,
                ..Default::default()
            };
            retry.data.else_option = true;
            edges.push(retry);
        }
    }

    let mut flow = EditorFlow {
        nodes,
        edges,
        ..Default::default()
    };

    let positions = compute_layout(&flow.to_graph(), &LayoutConfig::default());
    for node in &mut flow.nodes {
        if let Some(position) = positions.get(&node.id) {
            node.position = *position;
        }
    }
    flow
}

fn make_node(id: &str, kind: NodeKind, is_start: bool) -> EditorNode {
    EditorNode {
        id: id.to_string(),
        kind,
        position: Position::default(),
        data: EditorNodeData {
            is_start,
            ..Default::default()
        },
    }
}
