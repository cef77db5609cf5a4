use clap::{Parser, Subcommand, ValueEnum};
use flowscope::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::time::Instant;

/// A flow-graph analysis CLI: format detection, conversion, auto-layout and
/// variable scoping for conversational flow JSON files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect which wire format a JSON document uses
    Detect {
        /// Path to the flow JSON file
        file: String,
    },
    /// Convert a flow between the editor and engine formats
    Convert {
        /// Path to the flow JSON file (either format)
        file: String,

        /// The target format
        #[arg(short, long, value_enum)]
        to: TargetFormat,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute canvas positions for every node
    Layout {
        /// Path to the flow JSON file (either format)
        file: String,

        /// The layout strategy to run
        #[arg(short, long, value_enum, default_value_t = StrategyCli::Ranked)]
        strategy: StrategyCli,
    },
    /// List the variables referenceable at a node
    Scope {
        /// Path to the flow JSON file (either format)
        file: String,

        /// Id of the node to query
        node_id: String,
    },
    /// List every variable declared anywhere in a flow
    Vars {
        /// Path to the flow JSON file (either format)
        file: String,
    },
}

/// CLI-facing spelling of the two wire formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetFormat {
    Editor,
    Engine,
}

/// CLI-facing spelling of the layout strategies.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyCli {
    Ranked,
    LeveledBfs,
}

impl From<StrategyCli> for LayoutChoice {
    fn from(strategy: StrategyCli) -> Self {
        match strategy {
            StrategyCli::Ranked => LayoutChoice::Ranked,
            StrategyCli::LeveledBfs => LayoutChoice::LeveledBfs,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Detect { file } => run_detect(&file),
        Command::Convert { file, to, output } => run_convert(&file, to, output),
        Command::Layout { file, strategy } => run_layout(&file, strategy),
        Command::Scope { file, node_id } => run_scope(&file, &node_id),
        Command::Vars { file } => run_vars(&file),
    }
}

fn run_detect(file: &str) {
    let document: serde_json::Value = serde_json::from_str(&read_file(file))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse '{}': {}", file, e)));

    match detect_format(&document) {
        Ok(FlowFormat::Engine) => println!("engine"),
        Ok(FlowFormat::Editor) => println!("editor"),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

fn run_convert(file: &str, to: TargetFormat, output: Option<String>) {
    let start = Instant::now();
    let editor = load_flow(file);

    let serialized = match to {
        TargetFormat::Editor => serde_json::to_string_pretty(&editor),
        TargetFormat::Engine => serde_json::to_string_pretty(&editor_to_engine(&editor)),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));

    match output {
        Some(path) => {
            fs::write(&path, serialized).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!(
                "Converted {} node(s) to {:?} format in {:?} -> '{}'",
                editor.nodes.len(),
                to,
                start.elapsed(),
                path
            );
        }
        None => println!("{}", serialized),
    }
}

fn run_layout(file: &str, strategy: StrategyCli) {
    let editor = load_flow(file);
    let graph = editor.to_graph();

    let choice: LayoutChoice = strategy.into();
    let positions = choice
        .strategy()
        .compute(&graph, &LayoutConfig::default())
        .unwrap_or_else(|e| {
            exit_with_error(&format!("{} layout failed: {}", choice.strategy().name(), e))
        });

    // Sorted output so repeated runs diff cleanly.
    let sorted: BTreeMap<String, Position> = positions.into_iter().collect();
    let serialized = serde_json::to_string_pretty(&sorted)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize positions: {}", e)));
    println!("{}", serialized);
}

fn run_scope(file: &str, node_id: &str) {
    let editor = load_flow(file);
    let graph = editor.to_graph();

    let variables = variables_in_scope(&graph, node_id);
    if variables.is_empty() {
        println!("No variables in scope at '{}'", node_id);
        return;
    }

    println!("Variables in scope at '{}':", node_id);
    for variable in &variables {
        println!(
            "  {} ({}) from '{}'{}",
            variable.name,
            variable.kind,
            variable.source_node_name,
            if variable.required { " [required]" } else { "" }
        );
    }
}

fn run_vars(file: &str) {
    let editor = load_flow(file);
    let graph = editor.to_graph();

    let variables = graph.all_variables();
    if variables.is_empty() {
        println!("Flow declares no variables");
        return;
    }

    println!("Declared variables ({}):", variables.len());
    for variable in &variables {
        println!(
            "  {} ({}) declared by '{}'",
            variable.name, variable.kind, variable.source_node_id
        );
    }
}

/// Reads and imports a flow in either wire format.
fn load_flow(file: &str) -> EditorFlow {
    import_flow(&read_file(file))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to import '{}': {}", file, e)))
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
