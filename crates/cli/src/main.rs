use clap::{Parser, Subcommand};
use credence_cli::commands::{init, inspect, invoke, query};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "credence")]
#[command(about = "Credence Ledger CLI - operator tool for the credential ledger state", long_about = None)]
struct Cli {
    /// Path to the ledger state file.
    #[arg(long, short, default_value = "credence.state")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger state with a bootstrap marker.
    Init {
        marker: String,
    },
    /// Run a mutating operation: write, addToDegreesCompleted, addAppliedDegree.
    Invoke {
        function: String,
        args: Vec<String>,
    },
    /// Run a read-only operation: read.
    Query {
        function: String,
        args: Vec<String>,
    },
    /// Show the degree repositories recorded for one person.
    Inspect {
        govt_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { marker } => init::run(&cli.store, &marker),
        Commands::Invoke { function, args } => invoke::run(&cli.store, &function, &args),
        Commands::Query { function, args } => query::run(&cli.store, &function, &args),
        Commands::Inspect { govt_id } => inspect::run(&cli.store, &govt_id),
    }
}
