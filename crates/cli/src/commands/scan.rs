//! Match fragments in a base string without storing anything.

use anyhow::{Context, Result};
use clap::Parser;

use gene_core::{GeneSequence, parse_bases};
use gene_runtime::{LabConfig, LabContent};

use super::{OutputFormat, print_json};
use crate::render;

/// Match fragments in a base string
#[derive(Parser, Debug)]
pub struct Scan {
    /// Bases to scan, e.g. "TATATATA"
    #[arg(value_name = "BASES")]
    bases: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Scan {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let content = LabContent::from_config(config).context("Failed to load gene content")?;
        let bases = parse_bases(&self.bases).context("Invalid bases")?;
        let sequence = GeneSequence::new(bases.clone(), bases.len(), content.catalog())?;

        match self.format {
            OutputFormat::Summary => render::print_fragments(sequence.fragments()),
            OutputFormat::Json => print_json(&sequence.fragments())?,
        }

        Ok(())
    }
}
