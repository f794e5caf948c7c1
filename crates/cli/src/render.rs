//! Terminal rendering for sequences, mutations and expression reports.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use gene_core::{
    ExpressionReport, GeneEffect, GeneFragmentInstance, GeneSequence, MutationRecord,
    SequenceSave, format_bases,
};

/// JSON view of a live sequence: authoritative state plus matched fragments.
#[derive(Serialize)]
pub struct SequenceView<'a> {
    pub bases: String,
    pub unlocked_slots: usize,
    pub seed: u64,
    pub digest: String,
    pub fragments: &'a [GeneFragmentInstance],
    pub mutations: &'a [MutationRecord],
}

impl<'a> SequenceView<'a> {
    pub fn new(sequence: &'a GeneSequence) -> Result<Self> {
        Ok(Self {
            bases: format_bases(sequence.bases()),
            unlocked_slots: sequence.unlocked_slots(),
            seed: sequence.seed(),
            digest: digest_hex(&sequence.to_save())?,
            fragments: sequence.fragments(),
            mutations: sequence.mutations(),
        })
    }
}

pub fn digest_hex(save: &SequenceSave) -> Result<String> {
    let digest = save.digest().context("Failed to digest sequence save")?;
    Ok(hex::encode(digest))
}

pub fn print_sequence(sequence: &GeneSequence) {
    println!("{} {}", style("Sequence:").bold().cyan(), sequence);
    println!("{} {}", style("Seed:").bold().cyan(), sequence.seed());
    println!(
        "{} {}",
        style("Mutations:").bold().cyan(),
        sequence.mutations().len()
    );
    println!();
    print_fragments(sequence.fragments());
}

pub fn print_fragments(fragments: &[GeneFragmentInstance]) {
    if fragments.is_empty() {
        println!("{}", style("No fragments matched").dim());
        return;
    }

    println!("{}", style("Fragments:").bold().yellow());
    for fragment in fragments {
        let mut flags = Vec::new();
        if fragment.is_active {
            flags.push("active".to_string());
        }
        if let Some(ticks) = fragment.cooldown_remaining {
            flags.push(format!("cooldown {}", ticks));
        }

        println!(
            "  {} {} [{}..{}) {} {} - {}{}",
            style(fragment.instance_id).dim(),
            style(&fragment.template.name).green(),
            fragment.start_index,
            fragment.end_index(),
            format_bases(&fragment.template.pattern),
            style(fragment.rarity()).magenta(),
            describe_effect(fragment.effect()),
            if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            }
        );
        println!("      when {:?}, purity {}", fragment.condition(), fragment.purity);
    }
}

pub fn print_record(record: &MutationRecord) {
    let result = if record.is_positive() {
        style(record.result).green()
    } else {
        style(record.result).red()
    };
    println!(
        "  #{} {} at {}: {} -> {} {}{}",
        record.nonce,
        record.kind,
        record.position,
        format_bases(&record.before),
        format_bases(&record.after),
        result,
        if record.stabilized { " (stabilized)" } else { "" }
    );
}

pub fn print_report(report: &ExpressionReport, sequence: &GeneSequence) {
    println!("{}", style("=== Expression ===").bold().green());
    println!();

    if report.is_empty() {
        println!("{}", style("No fragments expressed").dim());
        return;
    }

    println!("{}", style("Expressed:").bold().yellow());
    for id in &report.active {
        if let Some(fragment) = sequence.fragment(*id) {
            println!(
                "  {} {} - {}",
                style(id).dim(),
                fragment.template.name,
                describe_effect(fragment.effect())
            );
        }
    }
    println!();

    println!(
        "{} {:.1}%",
        style("Life steal:").bold().yellow(),
        report.life_steal
    );
    if !report.stats.is_empty() {
        println!("{}", style("Stats:").bold().yellow());
        for (stat, value) in &report.stats {
            println!("  {}: +{:.1}", stat, value);
        }
    }
}

fn describe_effect(effect: &GeneEffect) -> String {
    match effect {
        GeneEffect::StatBoost { stats } => stats
            .iter()
            .map(|(stat, value)| format!("{} +{}", stat, value))
            .collect::<Vec<_>>()
            .join(", "),
        GeneEffect::LifeSteal {
            base_percent,
            trigger,
        } => format!("life steal {}% {:?}", base_percent, trigger),
    }
}
