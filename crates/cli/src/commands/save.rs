//! Store a new sequence in a save slot.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use gene_core::parse_bases;
use gene_runtime::{GeneLab, LabConfig, LabContent, SequenceRepository};

use super::open_repository;
use crate::render;

/// Store a new sequence in a save slot
#[derive(Parser, Debug)]
pub struct Save {
    /// Slot name (letters, digits, '-' or '_')
    #[arg(value_name = "SLOT")]
    slot: String,

    /// Bases of the new sequence
    #[arg(value_name = "BASES")]
    bases: String,

    /// Unlocked slots (defaults to GENE_CAPACITY or the tuning default)
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Mutation seed (defaults to GENE_SEED or a random seed)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Overwrite an existing slot
    #[arg(short, long)]
    force: bool,
}

impl Save {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let repo = open_repository(config)?;
        if repo.exists(&self.slot) && !self.force {
            anyhow::bail!(
                "Slot '{}' already exists in {}\n\nHint: pass --force to overwrite",
                self.slot,
                repo.base_dir().display()
            );
        }

        let content = LabContent::from_config(config).context("Failed to load gene content")?;
        let bases = parse_bases(&self.bases).context("Invalid bases")?;
        let capacity = self.capacity.or(config.capacity);
        let seed = self.seed.unwrap_or_else(|| config.seed_or_random());

        let lab = GeneLab::from_bases(content, bases, capacity, seed)?;
        let digest = lab.save(&repo, &self.slot)?;

        println!("{} {}", style("Saved slot:").bold().cyan(), self.slot);
        println!("{} {}", style("Digest:").bold().cyan(), hex::encode(digest));
        println!();
        render::print_sequence(lab.sequence());

        Ok(())
    }
}
