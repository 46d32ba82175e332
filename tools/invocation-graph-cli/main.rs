use clap::Parser;
use invocation_graph::prelude::*;
use std::io::{self, Read};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Builds a text-to-image invocation graph from a generation config
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the generation config JSON file, or `-` to read stdin
    #[arg(default_value = "-")]
    config_path: String,

    /// Override the seed (implies a fixed seed)
    #[arg(long)]
    seed: Option<u32>,

    /// Override the number of images to generate
    #[arg(long)]
    iterations: Option<i64>,

    /// Let the backend pick a random seed
    #[arg(long, conflicts_with = "seed")]
    random_seed: bool,

    /// Blend in variation seeds, e.g. "1234:0.1,5678:0.25"
    #[arg(long)]
    seed_weights: Option<String>,

    /// Check edges against the node field catalogs before printing
    #[arg(long)]
    validate: bool,

    /// Indent the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Config Loading ---
    let mut config = load_config(&cli.config_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e)));
    apply_overrides(&mut config, &cli);
    debug!(?config, "effective generation config");

    // --- 2. Graph Assembly ---
    let graph = build_graph(&config)
        .unwrap_or_else(|e| exit_with_error(&format!("Graph build failed: {}", e)));

    if cli.validate {
        graph
            .validate()
            .unwrap_or_else(|e| exit_with_error(&format!("Graph validation failed: {}", e)));
    }

    // --- 3. Output ---
    let rendered = if cli.pretty {
        graph.to_json_pretty()
    } else {
        graph.to_json()
    };
    let json = rendered.unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("{}", json);

    info!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        elapsed = ?total_start.elapsed(),
        "graph written"
    );
}

fn load_config(path: &str) -> std::result::Result<GenerationConfig, ConfigError> {
    if path != "-" {
        return GenerationConfig::from_file(path);
    }
    let mut json = String::new();
    io::stdin()
        .read_to_string(&mut json)
        .map_err(|source| ConfigError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    GenerationConfig::from_json(&json)
}

/// Command-line flags win over values from the config file.
fn apply_overrides(config: &mut GenerationConfig, cli: &Cli) {
    if let Some(seed) = cli.seed {
        config.seed = seed;
        config.should_randomize_seed = false;
    }
    if cli.random_seed {
        config.should_randomize_seed = true;
    }
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(seed_weights) = &cli.seed_weights {
        config.seed_weights = seed_weights.clone();
        config.should_generate_variations = true;
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
