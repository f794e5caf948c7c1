//! Evaluate which fragments express for a battle snapshot.

use anyhow::Result;
use clap::Parser;

use gene_core::BattleContext;
use gene_runtime::LabConfig;

use super::{OutputFormat, SequenceSource, print_json};
use crate::render;

/// Evaluate expressed effects for a battle snapshot
#[derive(Parser, Debug)]
pub struct Evaluate {
    #[command(flatten)]
    source: SequenceSource,

    /// Current HP
    #[arg(long, default_value_t = 100)]
    hp: u32,

    /// Maximum HP
    #[arg(long, default_value_t = 100)]
    max_hp: u32,

    /// Current combo count
    #[arg(long, default_value_t = 0)]
    combo: u32,

    /// Kills this battle
    #[arg(long, default_value_t = 0)]
    kills: u32,

    /// Damage taken this battle
    #[arg(long, default_value_t = 0)]
    damage_taken: u32,

    /// Elapsed battle time in seconds
    #[arg(long, default_value_t = 0)]
    battle_time: u32,

    /// Last action was a skill
    #[arg(long)]
    skill: bool,

    /// Last action was a dodge
    #[arg(long)]
    dodge: bool,

    /// Incoming damage would be fatal
    #[arg(long)]
    fatal: bool,

    /// Override the purity of every fragment (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    purity: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Evaluate {
    fn context(&self) -> BattleContext {
        let mut context = BattleContext::new(self.max_hp)
            .with_hp(self.hp)
            .with_combo(self.combo)
            .with_kills(self.kills)
            .with_damage_taken(self.damage_taken)
            .with_battle_time(self.battle_time);
        if self.skill {
            context = context.with_skill();
        }
        if self.dodge {
            context = context.with_dodge();
        }
        if self.fatal {
            context = context.with_fatal_damage();
        }
        context
    }

    pub fn execute(self, config: &LabConfig) -> Result<()> {
        let mut lab = self.source.open(config)?;
        lab.activate_all();

        if let Some(purity) = self.purity {
            let ids: Vec<_> = lab
                .sequence()
                .fragments()
                .iter()
                .map(|f| f.instance_id)
                .collect();
            for id in ids {
                lab.set_purity(id, purity)?;
            }
        }

        let report = lab.evaluate(&self.context());

        match self.format {
            OutputFormat::Summary => render::print_report(&report, lab.sequence()),
            OutputFormat::Json => print_json(&report)?,
        }

        Ok(())
    }
}
