//! Apply random mutations to a fresh or saved sequence.

use anyhow::Result;
use clap::Parser;
use console::style;

use gene_core::MutationKind;
use gene_runtime::LabConfig;

use super::{OutputFormat, SequenceSource, open_repository, print_json};
use crate::render::{self, SequenceView};

/// Apply random mutations to a sequence
#[derive(Parser, Debug)]
pub struct Mutate {
    #[command(flatten)]
    source: SequenceSource,

    /// Number of mutations to apply
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Mutation kind
    #[arg(short, long, value_enum, default_value = "point")]
    kind: KindArg,

    /// Use a stabilizer on every mutation (forces positive results)
    #[arg(long)]
    stabilize: bool,

    /// Slot to store the result in (defaults to --slot when loading)
    #[arg(long, value_name = "SLOT")]
    save: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum KindArg {
    /// Rewrite a single base
    Point,
    /// Rewrite a contiguous span
    Fragment,
}

impl From<KindArg> for MutationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Point => MutationKind::Point,
            KindArg::Fragment => MutationKind::Fragment,
        }
    }
}

impl Mutate {
    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let mut lab = self.source.open(config)?;

        let mut records = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            records.push(lab.mutate(self.kind.into(), self.stabilize)?);
        }

        let target = self.save.as_ref().or(self.source.slot.as_ref());
        if let Some(slot) = target {
            let repo = open_repository(config)?;
            lab.save(&repo, slot)?;
        }

        match self.format {
            OutputFormat::Summary => {
                println!("{}", style("Mutations:").bold().yellow());
                for record in &records {
                    render::print_record(record);
                }
                println!();
                render::print_sequence(lab.sequence());
                if let Some(slot) = target {
                    println!();
                    println!("{} {}", style("Saved to slot:").bold().cyan(), slot);
                }
            }
            OutputFormat::Json => print_json(&SequenceView::new(lab.sequence())?)?,
        }

        Ok(())
    }
}
