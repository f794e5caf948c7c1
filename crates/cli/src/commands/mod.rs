//! Command implementations for genelab
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod evaluate;
mod inspect;
mod mutate;
mod save;
mod scan;

pub use evaluate::Evaluate;
pub use inspect::Inspect;
pub use mutate::Mutate;
pub use save::Save;
pub use scan::Scan;

use anyhow::{Context, Result};
use clap::Args;

use gene_core::parse_bases;
use gene_runtime::{FileSequenceRepository, GeneLab, LabConfig, LabContent};

/// Output format shared by commands that print a sequence.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

/// Where a command gets its sequence from: fresh bases or a saved slot.
#[derive(Args, Debug)]
pub struct SequenceSource {
    /// Bases for a fresh sequence, e.g. "TATA GGG"
    #[arg(short, long, value_name = "BASES", conflicts_with = "slot")]
    pub bases: Option<String>,

    /// Saved slot to load
    #[arg(short, long, value_name = "SLOT")]
    pub slot: Option<String>,

    /// Unlocked slots for a fresh sequence
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Mutation seed for a fresh sequence
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl SequenceSource {
    pub fn open(&self, config: &LabConfig) -> Result<GeneLab> {
        let content = LabContent::from_config(config).context("Failed to load gene content")?;

        match (&self.slot, &self.bases) {
            (Some(slot), _) => {
                let repo = open_repository(config)?;
                Ok(GeneLab::load(content, &repo, slot)?)
            }
            (None, Some(bases)) => {
                let bases = parse_bases(bases).context("Invalid bases")?;
                let capacity = self.capacity.or(config.capacity);
                let seed = self.seed.unwrap_or_else(|| config.seed_or_random());
                Ok(GeneLab::from_bases(content, bases, capacity, seed)?)
            }
            (None, None) => anyhow::bail!("Provide either --bases or --slot"),
        }
    }
}

pub fn open_repository(config: &LabConfig) -> Result<FileSequenceRepository> {
    let dir = config.save_dir();
    FileSequenceRepository::new(&dir)
        .with_context(|| format!("Failed to open save directory: {}", dir.display()))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}
