//! Inspect save slots.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use gene_runtime::{GeneLab, LabConfig, LabContent, SequenceRepository};

use super::{OutputFormat, open_repository, print_json};
use crate::render::{self, SequenceView};

/// Inspect save slots
#[derive(Parser, Debug)]
pub struct Inspect {
    /// Slot to inspect. Lists all slots when omitted.
    #[arg(value_name = "SLOT")]
    slot: Option<String>,

    /// Show the full mutation log
    #[arg(short, long)]
    log: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Inspect {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let repo = open_repository(config)?;

        let Some(slot) = self.slot else {
            let slots = repo.list_slots()?;
            match self.format {
                OutputFormat::Summary => {
                    println!(
                        "{} {}",
                        style("Save dir:").bold().cyan(),
                        repo.base_dir().display()
                    );
                    if slots.is_empty() {
                        println!("{}", style("No saved sequences").dim());
                    }
                    for slot in slots {
                        println!("  {}", slot);
                    }
                }
                OutputFormat::Json => print_json(&slots)?,
            }
            return Ok(());
        };

        let content = LabContent::from_config(config).context("Failed to load gene content")?;
        let lab = GeneLab::load(content, &repo, &slot)?;
        let sequence = lab.sequence();

        match self.format {
            OutputFormat::Summary => {
                println!("{} {}", style("Slot:").bold().cyan(), slot);
                println!(
                    "{} {}",
                    style("Digest:").bold().cyan(),
                    render::digest_hex(&sequence.to_save())?
                );
                render::print_sequence(sequence);
                if self.log && !sequence.mutations().is_empty() {
                    println!();
                    println!("{}", style("Mutation log:").bold().yellow());
                    for record in sequence.mutations() {
                        render::print_record(record);
                    }
                }
            }
            OutputFormat::Json => print_json(&SequenceView::new(sequence)?)?,
        }

        Ok(())
    }
}
