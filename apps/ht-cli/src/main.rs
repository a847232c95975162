use clap::{Parser, Subcommand};
use ht_app::{AppResult, HarnessTwin, build_twin, load_dataset, run_queries};
use ht_loader::Dataset;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ht-cli")]
#[command(about = "Harness Twin CLI - wiring harness load validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node, edge and pin counts of a dataset
    Summary {
        /// Path to the dataset (YAML or JSON)
        dataset: PathBuf,
    },
    /// Run every query listed in a dataset
    Check {
        /// Path to the dataset (YAML or JSON)
        dataset: PathBuf,
    },
    /// Validate one load at a proposed current
    Validate {
        /// Path to the dataset (YAML or JSON)
        dataset: PathBuf,
        /// Load node ID (e.g. Lamp_Fog_L)
        load: String,
        /// Proposed current in amps
        amps: f64,
    },
    /// List pins with their ratings
    Pins {
        /// Path to the dataset (YAML or JSON)
        dataset: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { dataset } => cmd_summary(&dataset),
        Commands::Check { dataset } => cmd_check(&dataset),
        Commands::Validate {
            dataset,
            load,
            amps,
        } => cmd_validate(&dataset, &load, amps),
        Commands::Pins { dataset } => cmd_pins(&dataset),
    }
}

fn open_twin(path: &Path) -> AppResult<(Dataset, HarnessTwin)> {
    let dataset = load_dataset(path)?;
    let twin = build_twin(&dataset)?;
    tracing::debug!(path = %path.display(), name = %dataset.name, "opened dataset");
    Ok((dataset, twin))
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_summary(path: &Path) -> AppResult<()> {
    let (dataset, twin) = open_twin(path)?;
    let summary = twin.summary();
    let limits = twin.limits();

    println!("Dataset: {}", dataset.name);
    println!(
        "  Nodes: {} ({} ECUs, {} pins, {} other)",
        summary.nodes, summary.ecus, summary.pins, summary.generic
    );
    println!(
        "  Edges: {} ({} wire segments, {} internal)",
        summary.edges,
        summary.wire_edges / 2,
        summary.internal_edges
    );
    println!(
        "  Limits: max drop {} V on a {} V bus",
        limits.max_voltage_drop_v, limits.nominal_bus_v
    );
    println!("  Queries: {}", dataset.queries.len());
    Ok(())
}

fn cmd_check(path: &Path) -> AppResult<()> {
    let (dataset, twin) = open_twin(path)?;
    if dataset.queries.is_empty() {
        println!("No queries found in dataset");
        return Ok(());
    }

    let records: Vec<_> = run_queries(&twin, &dataset)
        .iter()
        .map(|r| r.to_record())
        .collect();
    print_json(&records)
}

fn cmd_validate(path: &Path, load: &str, amps: f64) -> AppResult<()> {
    let (_dataset, twin) = open_twin(path)?;
    let verdict = twin.validate(load, amps)?;
    print_json(&verdict.report())
}

fn cmd_pins(path: &Path) -> AppResult<()> {
    let (_dataset, twin) = open_twin(path)?;
    let mut pins: Vec<_> = twin.graph().pins().collect();
    if pins.is_empty() {
        println!("No pins found in dataset");
        return Ok(());
    }

    pins.sort_by(|a, b| a.0.key.cmp(&b.0.key));
    println!("Pins:");
    for (node, attrs) in pins {
        println!(
            "  {:<20} {:>6} A  {:>5} V  {} ({})",
            node.key, attrs.max_current_amps, attrs.voltage_ref, attrs.function, attrs.pin_type
        );
    }
    Ok(())
}
