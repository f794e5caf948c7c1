//! End-to-end tests for the lab facade over real content and file storage.

use std::fs;

use gene_core::{BasePair, BattleContext, MutationKind, StatKind, parse_bases};
use gene_runtime::{
    FileSequenceRepository, GeneLab, LabConfig, LabContent, RuntimeError, SequenceRepository,
};
use tempfile::TempDir;

fn embedded_lab(bases: &str, seed: u64) -> GeneLab {
    let content = LabContent::embedded().expect("embedded content should load");
    GeneLab::from_bases(content, parse_bases(bases).unwrap(), Some(16), seed).unwrap()
}

#[test]
fn file_round_trip_rebuilds_fragments() {
    let dir = TempDir::new().unwrap();
    let repo = FileSequenceRepository::new(dir.path()).unwrap();

    let mut lab = embedded_lab("TATATATA", 11);
    for _ in 0..5 {
        lab.mutate(MutationKind::Fragment, false).unwrap();
    }
    lab.save(&repo, "run-1").unwrap();

    let restored = GeneLab::load(lab.content().clone(), &repo, "run-1").unwrap();
    assert_eq!(restored.sequence().bases(), lab.sequence().bases());
    assert_eq!(restored.sequence().mutations().len(), 5);
    assert_eq!(restored.sequence().seed(), 11);

    let ids = |lab: &GeneLab| {
        lab.sequence()
            .fragments()
            .iter()
            .map(|f| (f.id().clone(), f.start_index))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&restored), ids(&lab));
    assert!(restored.sequence().fragments().iter().all(|f| !f.is_active));
    assert_eq!(repo.list_slots().unwrap(), vec!["run-1"]);
}

#[test]
fn seeded_labs_mutate_identically() {
    let mut a = embedded_lab("GGGAAACCCT", 99);
    let mut b = embedded_lab("GGGAAACCCT", 99);

    for step in 0..20 {
        let kind = if step % 3 == 0 {
            MutationKind::Fragment
        } else {
            MutationKind::Point
        };
        let ra = a.mutate(kind, step % 2 == 0).unwrap();
        let rb = b.mutate(kind, step % 2 == 0).unwrap();
        assert_eq!(ra, rb);
    }
    assert_eq!(a.sequence().bases(), b.sequence().bases());
    assert_eq!(
        a.sequence().to_save().digest().unwrap(),
        b.sequence().to_save().digest().unwrap()
    );
}

#[test]
fn cooldown_gates_expression_until_ticked_out() {
    let mut lab = embedded_lab("GCGC", 1);
    lab.activate_all();
    let id = lab.sequence().fragments()[0].instance_id;
    let context = BattleContext::new(100).with_combo(6);

    assert_eq!(lab.evaluate(&context).stat(StatKind::CritRate), Some(30.0));

    assert_eq!(lab.trigger(id).unwrap(), Some(30));
    assert!(lab.evaluate(&context).is_empty());

    lab.tick(29);
    assert!(lab.evaluate(&context).is_empty());
    lab.tick(1);
    assert_eq!(lab.evaluate(&context).active, vec![id]);
}

#[test]
fn content_files_override_embedded_defaults() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.ron");
    let config_path = dir.path().join("tuning.toml");
    fs::write(
        &catalog_path,
        r#"(
            templates: [
                (id: "spark", name: "Spark", pattern: [C, C], condition: Always,
                 effect: StatBoost(stats: { Speed: 1.0 })),
            ],
        )"#,
    )
    .unwrap();
    fs::write(&config_path, "default_capacity = 5\nnegative_chance_percent = 0\n").unwrap();

    let config = LabConfig {
        catalog_path: Some(catalog_path),
        config_path: Some(config_path),
        ..LabConfig::default()
    };
    let content = LabContent::from_config(&config).unwrap();
    assert_eq!(content.catalog().len(), 1);

    let mut lab = GeneLab::from_bases(content, vec![BasePair::C; 3], None, 5).unwrap();
    assert_eq!(lab.sequence().unlocked_slots(), 5);
    assert_eq!(lab.sequence().fragments().len(), 2);

    for _ in 0..10 {
        assert!(lab.mutate(MutationKind::Point, false).unwrap().is_positive());
    }
}

#[test]
fn missing_content_file_is_a_content_error() {
    let config = LabConfig {
        catalog_path: Some("/definitely/not/here.ron".into()),
        ..LabConfig::default()
    };
    let err = LabContent::from_config(&config).unwrap_err();
    assert!(matches!(err, RuntimeError::Content(_)));
}

#[test]
fn capacity_errors_leave_the_lab_unchanged() {
    let mut lab = embedded_lab("AAAA", 3);
    let before = lab.sequence().clone();

    let err = lab.insert(0, &[BasePair::G; 13]).unwrap_err();
    assert!(matches!(err, RuntimeError::Sequence(_)));
    assert_eq!(lab.sequence(), &before);

    lab.insert(4, &[BasePair::G; 3]).unwrap();
    assert_eq!(lab.sequence().free_slots(), 9);
    lab.delete(0, 4).unwrap();
    assert_eq!(lab.sequence().bases(), &[BasePair::G; 3]);
}
