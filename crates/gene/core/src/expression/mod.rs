//! Expression evaluator.
//!
//! Decides which matched fragments apply to the current battle tick and folds
//! their effects into numbers the combat formulas consume. Everything here is
//! a pure function of the fragment list and a [`BattleContext`].
//!
//! Effects scale *inversely* with purity: an imperfect match expresses more
//! strongly. `purity_factor` runs from ×1 at purity 100 to ×2 at purity 0.
mod context;

pub use context::BattleContext;

use std::collections::BTreeMap;

use crate::catalog::{CatalogOracle, ExpressionCondition, GeneEffect, StatKind, ThresholdDirection};
use crate::sequence::{FragmentInstanceId, GeneFragmentInstance};

/// Upper bound of the aggregated life-steal percentage.
pub const MAX_LIFE_STEAL: f64 = 100.0;

/// Returns true when the fragment's condition holds for this snapshot.
pub fn check_expression_condition(fragment: &GeneFragmentInstance, context: &BattleContext) -> bool {
    match *fragment.condition() {
        ExpressionCondition::Always => true,
        ExpressionCondition::HpThreshold { direction, percent } => {
            let hp = context.hp_percent();
            let threshold = f64::from(percent);
            match direction {
                ThresholdDirection::Below => hp < threshold,
                ThresholdDirection::Above => hp > threshold,
            }
        }
        ExpressionCondition::Combo { min } => context.combo_count >= min,
        ExpressionCondition::OnKill => context.kills > 0,
        ExpressionCondition::OnFatalDamage => context.is_fatal_damage,
        ExpressionCondition::OnSkill => context.last_action_was_skill,
        ExpressionCondition::OnDodge => context.last_action_was_dodge,
        ExpressionCondition::DamageTaken { min } => context.damage_taken >= min,
        ExpressionCondition::BattleTime { min_seconds } => context.battle_time >= min_seconds,
    }
}

/// Active, condition-satisfied and off cooldown.
fn is_expressed(fragment: &GeneFragmentInstance, context: &BattleContext) -> bool {
    fragment.is_active
        && !fragment.is_on_cooldown()
        && check_expression_condition(fragment, context)
}

/// Multiplier derived from purity: `1 + (100 - purity) / 100`.
pub fn purity_factor(purity: u8) -> f64 {
    let purity = purity.min(GeneFragmentInstance::FULL_PURITY);
    1.0 + f64::from(100 - purity) / 100.0
}

/// Fragments whose effects apply this tick, in sequence order.
pub fn get_active_gene_effects<'a>(
    fragments: &'a [GeneFragmentInstance],
    context: &BattleContext,
) -> Vec<&'a GeneFragmentInstance> {
    fragments
        .iter()
        .filter(|fragment| is_expressed(fragment, context))
        .collect()
}

/// Sum of expressed life-steal percentages, clamped to `[0, 100]`.
pub fn calculate_total_life_steal(
    fragments: &[GeneFragmentInstance],
    context: &BattleContext,
) -> f64 {
    let total: f64 = fragments
        .iter()
        .filter(|fragment| is_expressed(fragment, context))
        .filter_map(|fragment| match fragment.effect() {
            GeneEffect::LifeSteal { base_percent, .. } => {
                Some(base_percent * purity_factor(fragment.purity))
            }
            GeneEffect::StatBoost { .. } => None,
        })
        .sum();

    total.clamp(0.0, MAX_LIFE_STEAL)
}

/// Per-stat totals of expressed stat boosts, scaled by rarity and purity.
///
/// Stats no expressed fragment touches are absent from the map.
pub fn calculate_gene_stats<C>(
    fragments: &[GeneFragmentInstance],
    context: &BattleContext,
    catalog: &C,
) -> BTreeMap<StatKind, f64>
where
    C: CatalogOracle + ?Sized,
{
    let mut totals = BTreeMap::new();

    for fragment in fragments.iter().filter(|f| is_expressed(f, context)) {
        let GeneEffect::StatBoost { stats } = fragment.effect() else {
            continue;
        };
        let scale = catalog.rarity_multiplier(fragment.rarity()) * purity_factor(fragment.purity);
        for (&stat, &delta) in stats {
            *totals.entry(stat).or_insert(0.0) += delta * scale;
        }
    }

    totals
}

/// Everything the battle loop needs from the gene system for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionReport {
    pub active: Vec<FragmentInstanceId>,
    pub life_steal: f64,
    pub stats: BTreeMap<StatKind, f64>,
}

impl ExpressionReport {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn stat(&self, stat: StatKind) -> Option<f64> {
        self.stats.get(&stat).copied()
    }
}

/// Evaluates all three read paths at once.
pub fn evaluate<C>(
    fragments: &[GeneFragmentInstance],
    context: &BattleContext,
    catalog: &C,
) -> ExpressionReport
where
    C: CatalogOracle + ?Sized,
{
    ExpressionReport {
        active: get_active_gene_effects(fragments, context)
            .into_iter()
            .map(|f| f.instance_id)
            .collect(),
        life_steal: calculate_total_life_steal(fragments, context),
        stats: calculate_gene_stats(fragments, context, catalog),
    }
}

#[cfg(test)]
mod tests;
