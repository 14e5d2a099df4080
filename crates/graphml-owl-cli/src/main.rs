use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use graphml_owl_core::config::{DEFAULT_GRAPHML_INPUT, DEFAULT_GRAPHML_OUTPUT, DEFAULT_OWL_OUTPUT};
use graphml_owl_core::{Config, ConversionSummary, Converter, FileStorage};

#[derive(Parser)]
#[command(name = "graphml-owl")]
#[command(about = "Convert yFiles GraphML diagrams to OWL ontologies and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GraphML diagram into an OWL ontology
    ToOwl {
        /// GraphML file to read
        input: PathBuf,
        /// OWL file to write
        output: PathBuf,
    },
    /// Convert an OWL ontology into a GraphML diagram
    ToGraphml {
        /// OWL file to read
        input: PathBuf,
        /// GraphML file to write
        output: PathBuf,
    },
    /// Convert a diagram to an ontology and the ontology back to a diagram
    RoundTrip {
        /// GraphML file to read
        #[arg(default_value = DEFAULT_GRAPHML_INPUT)]
        graphml: PathBuf,
        /// Intermediate OWL file to write
        #[arg(default_value = DEFAULT_OWL_OUTPUT)]
        owl: PathBuf,
        /// Restored GraphML file to write
        #[arg(default_value = DEFAULT_GRAPHML_OUTPUT)]
        restored: PathBuf,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn init_tracing() {
    // RUST_LOG wins when set; otherwise show progress at info level.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &ConversionSummary) {
    println!(
        "{} complete: {} -> {}",
        summary.direction,
        summary.input.display(),
        summary.output.display()
    );
    println!(
        "  {} nodes, {} edges / {} classes, {} properties",
        summary.nodes, summary.edges, summary.classes, summary.properties
    );
    if !summary.report.is_complete() {
        println!("  {} items skipped:", summary.report.skipped.len());
        for skip in &summary.report.skipped {
            println!("    - {skip}");
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::DefaultConfig => print!("{}", Config::default_config_string()),
        command => convert(command)?,
    }

    Ok(())
}

fn convert(command: Commands) -> Result<()> {
    let config = Config::load().wrap_err("Failed to load configuration")?;
    let storage = FileStorage::with_config(config.storage.clone());
    let converter = Converter::new(storage, config);

    match command {
        Commands::ToOwl { input, output } => {
            let summary = converter.graphml_to_owl(&input, &output)?;
            print_summary(&summary);
        }
        Commands::ToGraphml { input, output } => {
            let summary = converter.owl_to_graphml(&input, &output)?;
            print_summary(&summary);
        }
        Commands::RoundTrip {
            graphml,
            owl,
            restored,
        } => {
            let (forward, reverse) = converter.round_trip(&graphml, &owl, &restored)?;
            print_summary(&forward);
            print_summary(&reverse);
        }
        Commands::DefaultConfig => {}
    }

    Ok(())
}
