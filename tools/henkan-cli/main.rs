use clap::Parser;
use henkan::prelude::*;
use std::fs;

/// Converts behavior-graph documents to canvas documents and back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input JSON document (a backend graph, or a canvas
    /// document with --reverse)
    input: String,

    /// Path to write the converted document; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Optional start-node output schema JSON (a list of canvas ports), as
    /// the property composer would supply it
    #[arg(long)]
    start_schema: Option<String>,

    /// Convert a canvas document back into a backend graph
    #[arg(short, long)]
    reverse: bool,

    /// Graph id for the reverse direction
    #[arg(long, default_value = "graph")]
    id: String,

    /// Graph name for the reverse direction
    #[arg(long, default_value = "Converted graph")]
    name: String,

    /// Graph kind for the reverse direction
    #[arg(long, default_value = "behavior")]
    kind: String,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.input).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read input file '{}': {}", cli.input, e))
    });

    let rendered = if cli.reverse {
        let document: CanvasDocument = serde_json::from_str(&input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas JSON: {}", e)));
        let graph = canvas_to_graph(&document, &cli.id, &cli.name, &cli.kind);
        serde_json::to_string_pretty(&graph)
    } else {
        let graph: GraphDefinition = serde_json::from_str(&input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
        let start_outputs = match &cli.start_schema {
            Some(path) => load_start_schema(path),
            None => Vec::new(),
        };
        let document = Translator::builder(graph)
            .with_start_outputs(start_outputs)
            .build()
            .to_canvas();
        serde_json::to_string_pretty(&document)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e))),
        None => println!("{}", rendered),
    }
}

fn load_start_schema(path: &str) -> Vec<CanvasPort> {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read start schema '{}': {}", path, e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse start schema JSON: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
