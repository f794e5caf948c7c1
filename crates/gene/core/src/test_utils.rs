//! Shared fixtures for unit tests.

use crate::base::BasePair::{A, C, G, T};
use crate::catalog::{
    ExpressionCondition, FragmentCatalog, GeneEffect, GeneFragmentTemplate, Rarity, StatKind,
};

/// Small catalog mirroring the shipped content's overlap structure.
pub(crate) fn test_catalog() -> FragmentCatalog {
    FragmentCatalog::new(vec![
        GeneFragmentTemplate::new(
            "berserker",
            "Berserker",
            &[A, A, A],
            ExpressionCondition::hp_below(30),
            GeneEffect::stat_boost([(StatKind::Attack, 20.0)]),
        )
        .unwrap()
        .with_rarity(Rarity::Rare),
        GeneFragmentTemplate::new(
            "iron_skin",
            "Iron Skin",
            &[G, G, G],
            ExpressionCondition::Always,
            GeneEffect::stat_boost([(StatKind::Defense, 10.0), (StatKind::MaxHp, 50.0)]),
        )
        .unwrap(),
        GeneFragmentTemplate::new(
            "vampiric",
            "Vampiric",
            &[T, A, T],
            ExpressionCondition::Always,
            GeneEffect::life_steal(5.0),
        )
        .unwrap()
        .with_rarity(Rarity::Uncommon),
        GeneFragmentTemplate::new(
            "bloodline",
            "Bloodline",
            &[T, A, T, A],
            ExpressionCondition::hp_below(50),
            GeneEffect::life_steal(10.0),
        )
        .unwrap()
        .with_rarity(Rarity::Epic),
        GeneFragmentTemplate::new(
            "combo_master",
            "Combo Master",
            &[G, C, G, C],
            ExpressionCondition::Combo { min: 5 },
            GeneEffect::stat_boost([(StatKind::CritRate, 15.0)]),
        )
        .unwrap()
        .with_rarity(Rarity::Epic)
        .with_cooldown(30),
        GeneFragmentTemplate::new(
            "last_stand",
            "Last Stand",
            &[C, G, A, T],
            ExpressionCondition::OnFatalDamage,
            GeneEffect::stat_boost([(StatKind::Defense, 50.0)]),
        )
        .unwrap()
        .with_rarity(Rarity::Legendary),
        GeneFragmentTemplate::new(
            "predator",
            "Predator",
            &[A, G, T],
            ExpressionCondition::OnKill,
            GeneEffect::stat_boost([(StatKind::Attack, 15.0)]),
        )
        .unwrap()
        .with_rarity(Rarity::Uncommon),
    ])
}
