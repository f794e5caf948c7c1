//! Gene lab tooling.
//!
//! Scans, mutates, evaluates and stores gene sequences from the command line.
//! Run with: `genelab <command>`

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Evaluate, Inspect, Mutate, Save, Scan};
use gene_runtime::LabConfig;

/// Gene sequence lab
#[derive(Parser)]
#[command(name = "genelab")]
#[command(about = "Inspect and mutate gene sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Fragment catalog (RON) to use instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Mutation tuning (TOML) to use instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    tuning: Option<PathBuf>,

    /// Directory holding save slots
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Match fragments in a base string
    Scan(Scan),

    /// Apply random mutations to a sequence
    Mutate(Mutate),

    /// Evaluate expressed effects for a battle snapshot
    Evaluate(Evaluate),

    /// Store a new sequence in a save slot
    Save(Save),

    /// Inspect save slots
    Inspect(Inspect),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GENE_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = LabConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(path) = cli.tuning {
        config.config_path = Some(path);
    }
    if let Some(dir) = cli.save_dir {
        config.save_dir = Some(dir);
    }

    match cli.command {
        Command::Scan(cmd) => cmd.execute(&config),
        Command::Mutate(cmd) => cmd.execute(&config),
        Command::Evaluate(cmd) => cmd.execute(&config),
        Command::Save(cmd) => cmd.execute(&config),
        Command::Inspect(cmd) => cmd.execute(&config),
    }
}
