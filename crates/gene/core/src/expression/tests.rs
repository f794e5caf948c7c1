use super::*;
use crate::base::BasePair::{A, T};
use crate::catalog::{FragmentCatalog, GeneFragmentTemplate, Rarity};
use crate::test_utils::test_catalog;

fn instance(template: GeneFragmentTemplate, id: u32) -> GeneFragmentInstance {
    let mut fragment = GeneFragmentInstance::new(template, FragmentInstanceId(id), 0);
    fragment.is_active = true;
    fragment
}

fn template(catalog: &FragmentCatalog, id: &str) -> GeneFragmentTemplate {
    catalog
        .templates
        .iter()
        .find(|t| t.id.as_str() == id)
        .cloned()
        .unwrap()
}

fn with_condition(condition: ExpressionCondition) -> GeneFragmentInstance {
    instance(
        GeneFragmentTemplate::new("sample", "Sample", &[A], condition, GeneEffect::life_steal(1.0))
            .unwrap(),
        0,
    )
}

#[test]
fn conditions_follow_the_snapshot() {
    let ctx = BattleContext::new(100);

    assert!(check_expression_condition(&with_condition(ExpressionCondition::Always), &ctx));

    let below = with_condition(ExpressionCondition::hp_below(30));
    assert!(!check_expression_condition(&below, &ctx.with_hp(30)));
    assert!(check_expression_condition(&below, &ctx.with_hp(29)));

    let above = with_condition(ExpressionCondition::hp_above(80));
    assert!(check_expression_condition(&above, &ctx.with_hp(81)));
    assert!(!check_expression_condition(&above, &ctx.with_hp(80)));

    let combo = with_condition(ExpressionCondition::Combo { min: 5 });
    assert!(!check_expression_condition(&combo, &ctx.with_combo(4)));
    assert!(check_expression_condition(&combo, &ctx.with_combo(5)));

    let kill = with_condition(ExpressionCondition::OnKill);
    assert!(!check_expression_condition(&kill, &ctx));
    assert!(check_expression_condition(&kill, &ctx.with_kills(1)));

    let fatal = with_condition(ExpressionCondition::OnFatalDamage);
    assert!(!check_expression_condition(&fatal, &ctx));
    assert!(check_expression_condition(&fatal, &ctx.with_fatal_damage()));

    let skill = with_condition(ExpressionCondition::OnSkill);
    assert!(check_expression_condition(&skill, &ctx.with_skill()));
    let dodge = with_condition(ExpressionCondition::OnDodge);
    assert!(check_expression_condition(&dodge, &ctx.with_dodge()));
    assert!(!check_expression_condition(&dodge, &ctx.with_skill()));

    let damage = with_condition(ExpressionCondition::DamageTaken { min: 50 });
    assert!(check_expression_condition(&damage, &ctx.with_damage_taken(50)));
    let time = with_condition(ExpressionCondition::BattleTime { min_seconds: 60 });
    assert!(!check_expression_condition(&time, &ctx.with_battle_time(59)));
}

#[test]
fn zero_max_hp_reads_as_empty() {
    let ctx = BattleContext::default();
    assert_eq!(ctx.hp_percent(), 0.0);
    assert!(check_expression_condition(
        &with_condition(ExpressionCondition::hp_below(10)),
        &ctx
    ));
}

#[test]
fn inactive_and_cooling_fragments_are_filtered() {
    let catalog = test_catalog();
    let ctx = BattleContext::new(100);

    let active = instance(template(&catalog, "vampiric"), 1);
    let mut inactive = instance(template(&catalog, "vampiric"), 2);
    inactive.is_active = false;
    let mut cooling = instance(template(&catalog, "vampiric"), 3);
    cooling.cooldown_remaining = Some(30);
    let mut rested = instance(template(&catalog, "vampiric"), 4);
    rested.cooldown_remaining = Some(0);

    let fragments = [active, inactive, cooling, rested];
    let ids: Vec<_> = get_active_gene_effects(&fragments, &ctx)
        .into_iter()
        .map(|f| f.instance_id.0)
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn purity_inversion_is_monotonic() {
    assert_eq!(purity_factor(100), 1.0);
    assert_eq!(purity_factor(50), 1.5);
    assert_eq!(purity_factor(0), 2.0);
    assert_eq!(purity_factor(200), 1.0);

    let catalog = test_catalog();
    let ctx = BattleContext::new(100);
    let mut previous = f64::MAX;
    for purity in 0..=100u8 {
        let mut fragment = instance(template(&catalog, "vampiric"), 0);
        fragment.purity = purity;
        let value = calculate_total_life_steal(std::slice::from_ref(&fragment), &ctx);
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn life_steal_is_clamped() {
    let leech = GeneFragmentTemplate::new(
        "leech",
        "Leech",
        &[T],
        ExpressionCondition::Always,
        GeneEffect::life_steal(10.0),
    )
    .unwrap();
    let fragments: Vec<_> = (0..20)
        .map(|i| {
            let mut fragment = instance(leech.clone(), i);
            fragment.purity = 0;
            fragment
        })
        .collect();

    assert_eq!(
        calculate_total_life_steal(&fragments, &BattleContext::new(100)),
        100.0
    );
}

#[test]
fn life_steal_ignores_stat_boosts_and_unmet_conditions() {
    let catalog = test_catalog();
    let fragments = [
        instance(template(&catalog, "vampiric"), 0),
        instance(template(&catalog, "bloodline"), 1),
        instance(template(&catalog, "iron_skin"), 2),
    ];

    // bloodline needs HP under 50%
    assert_eq!(
        calculate_total_life_steal(&fragments, &BattleContext::new(100)),
        5.0
    );
    assert_eq!(
        calculate_total_life_steal(&fragments, &BattleContext::new(100).with_hp(40)),
        15.0
    );
}

#[test]
fn stats_scale_by_rarity_and_purity() {
    let catalog = test_catalog();
    let mut berserker = instance(template(&catalog, "berserker"), 0);
    berserker.purity = 50;
    let iron_skin = instance(template(&catalog, "iron_skin"), 1);
    let predator = instance(template(&catalog, "predator"), 2);
    let fragments = [berserker, iron_skin, predator];

    let ctx = BattleContext::new(100).with_hp(20);
    let stats = calculate_gene_stats(&fragments, &ctx, &catalog);

    // 20 attack * rare 1.5 * purity 1.5; predator needs a kill
    assert_eq!(stats.get(&StatKind::Attack), Some(&45.0));
    assert_eq!(stats.get(&StatKind::Defense), Some(&10.0));
    assert_eq!(stats.get(&StatKind::MaxHp), Some(&50.0));
    assert!(!stats.contains_key(&StatKind::CritRate));
    assert_eq!(stats.len(), 3);

    let with_kill = calculate_gene_stats(&fragments, &ctx.with_kills(1), &catalog);
    assert!((with_kill[&StatKind::Attack] - (45.0 + 15.0 * 1.2)).abs() < 1e-9);
}

#[test]
fn rarity_table_comes_from_the_catalog() {
    let mut catalog = test_catalog();
    catalog.rarity.legendary = 10.0;
    let last_stand = instance(template(&catalog, "last_stand"), 0);
    assert_eq!(last_stand.rarity(), Rarity::Legendary);

    let stats = calculate_gene_stats(
        &[last_stand],
        &BattleContext::new(100).with_fatal_damage(),
        &catalog,
    );
    assert_eq!(stats[&StatKind::Defense], 500.0);
}

#[test]
fn no_expressed_fragments_yields_empty_results() {
    let catalog = test_catalog();
    let mut dormant = instance(template(&catalog, "iron_skin"), 0);
    dormant.is_active = false;

    let report = evaluate(&[dormant], &BattleContext::new(100), &catalog);
    assert!(report.is_empty());
    assert_eq!(report.life_steal, 0.0);
    assert!(report.stats.is_empty());
}

#[test]
fn report_bundles_all_read_paths() {
    let catalog = test_catalog();
    let fragments = [
        instance(template(&catalog, "vampiric"), 7),
        instance(template(&catalog, "iron_skin"), 8),
    ];

    let report = evaluate(&fragments, &BattleContext::new(100), &catalog);
    assert_eq!(report.active, vec![FragmentInstanceId(7), FragmentInstanceId(8)]);
    assert_eq!(report.life_steal, 5.0);
    assert_eq!(report.stat(StatKind::Defense), Some(10.0));
    assert_eq!(report.stat(StatKind::Attack), None);
}
