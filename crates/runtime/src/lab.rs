//! High-level facade over a live gene sequence.
//!
//! [`GeneLab`] owns one [`GeneSequence`] plus the content it is matched
//! against, routes every edit through [`GeneEngine`], and logs what happened.
use gene_core::{
    BasePair, BattleContext, ExpressionReport, FragmentInstanceId, GeneEngine, GeneError,
    GeneSequence, MutationKind, MutationRecord, SequenceError,
};

use crate::content::LabContent;
use crate::error::{Result, RuntimeError};
use crate::repository::SequenceRepository;

/// A sequence together with the content it is evaluated against.
#[derive(Clone, Debug)]
pub struct GeneLab {
    content: LabContent,
    sequence: GeneSequence,
}

impl GeneLab {
    pub fn new(content: LabContent, sequence: GeneSequence) -> Self {
        Self { content, sequence }
    }

    /// Builds a lab around fresh bases.
    ///
    /// `capacity` defaults to the tuning's `default_capacity`.
    pub fn from_bases(
        content: LabContent,
        bases: Vec<BasePair>,
        capacity: Option<usize>,
        seed: u64,
    ) -> Result<Self> {
        let capacity = capacity.unwrap_or(content.config().default_capacity);
        let sequence = GeneSequence::new(bases, capacity, content.catalog())?.with_seed(seed);

        tracing::debug!(
            "Created sequence {} with {} fragments",
            sequence,
            sequence.fragments().len()
        );

        Ok(Self::new(content, sequence))
    }

    /// Restores a lab from a repository slot.
    pub fn load(
        content: LabContent,
        repository: &dyn SequenceRepository,
        slot: &str,
    ) -> Result<Self> {
        let save = repository
            .load(slot)?
            .ok_or_else(|| RuntimeError::SlotNotFound {
                slot: slot.to_string(),
            })?;
        let digest = hex::encode(save.digest()?);
        let sequence = GeneSequence::from_save(save, content.catalog())?;

        tracing::info!(
            "Loaded slot '{}': {} ({} fragments, digest {})",
            slot,
            sequence,
            sequence.fragments().len(),
            digest
        );

        Ok(Self::new(content, sequence))
    }

    /// Stores the sequence in a repository slot and returns the save digest.
    pub fn save(&self, repository: &dyn SequenceRepository, slot: &str) -> Result<[u8; 32]> {
        let save = self.sequence.to_save();
        let digest = save.digest()?;
        repository.save(slot, &save)?;

        tracing::info!("Saved slot '{}' (digest {})", slot, hex::encode(digest));

        Ok(digest)
    }

    pub fn sequence(&self) -> &GeneSequence {
        &self.sequence
    }

    pub fn content(&self) -> &LabContent {
        &self.content
    }

    pub fn into_sequence(self) -> GeneSequence {
        self.sequence
    }

    /// Rewrites one base. See [`GeneEngine::replace_base`].
    pub fn replace(&mut self, index: usize, base: BasePair) -> Result<MutationRecord> {
        let env = self.content.as_env();
        let mut engine = GeneEngine::new(&mut self.sequence);
        let record = engine
            .replace_base(env, index, base)
            .map_err(|err| rejected("replace", err))?;

        tracing::info!("Replaced base {} with {}: {}", index, base, engine.sequence());
        log_rescan(engine.sequence());
        Ok(record)
    }

    /// Inserts bases before `index`. See [`GeneEngine::insert_bases`].
    pub fn insert(&mut self, index: usize, bases: &[BasePair]) -> Result<()> {
        let env = self.content.as_env();
        let mut engine = GeneEngine::new(&mut self.sequence);
        engine
            .insert_bases(env, index, bases)
            .map_err(|err| rejected("insert", err))?;

        tracing::info!(
            "Inserted {} bases at {}: {}",
            bases.len(),
            index,
            engine.sequence()
        );
        log_rescan(engine.sequence());
        Ok(())
    }

    /// Deletes `count` bases from `index`. See [`GeneEngine::delete_bases`].
    pub fn delete(&mut self, index: usize, count: usize) -> Result<()> {
        let env = self.content.as_env();
        let mut engine = GeneEngine::new(&mut self.sequence);
        engine
            .delete_bases(env, index, count)
            .map_err(|err| rejected("delete", err))?;

        tracing::info!("Deleted {} bases at {}: {}", count, index, engine.sequence());
        log_rescan(engine.sequence());
        Ok(())
    }

    /// Applies one random mutation. See [`GeneEngine::apply_mutation`].
    pub fn mutate(&mut self, kind: MutationKind, use_stabilizer: bool) -> Result<MutationRecord> {
        let env = self.content.as_env();
        let mut engine = GeneEngine::new(&mut self.sequence);
        let record = engine
            .apply_mutation(env, kind, use_stabilizer)
            .map_err(|err| rejected("mutate", err))?;

        tracing::info!(
            "{} mutation #{} at {} ({}{}): {}",
            record.kind,
            record.nonce,
            record.position,
            record.result,
            if record.stabilized { ", stabilized" } else { "" },
            engine.sequence()
        );
        log_rescan(engine.sequence());
        Ok(record)
    }

    /// Evaluates the sequence for a battle snapshot and refreshes the cached
    /// life steal.
    pub fn evaluate(&mut self, context: &BattleContext) -> ExpressionReport {
        self.sequence.refresh_life_steal(context);
        gene_core::evaluate(self.sequence.fragments(), context, self.content.catalog())
    }

    pub fn set_active(&mut self, id: FragmentInstanceId, active: bool) -> Result<()> {
        self.sequence
            .set_fragment_active(id, active)
            .map_err(|err| rejected("set_active", err))?;
        Ok(())
    }

    pub fn activate_all(&mut self) {
        self.sequence.set_all_active(true);
    }

    pub fn set_purity(&mut self, id: FragmentInstanceId, purity: u8) -> Result<()> {
        self.sequence
            .set_fragment_purity(id, purity)
            .map_err(|err| rejected("set_purity", err))?;
        Ok(())
    }

    /// Starts a fragment's cooldown after it fired.
    pub fn trigger(&mut self, id: FragmentInstanceId) -> Result<Option<u32>> {
        let cooldown = self
            .sequence
            .trigger_fragment(id)
            .map_err(|err| rejected("trigger", err))?;
        if let Some(ticks) = cooldown {
            tracing::debug!("Fragment {} cooling down for {} ticks", id, ticks);
        }
        Ok(cooldown)
    }

    pub fn tick(&mut self, elapsed: u32) {
        self.sequence.tick_cooldowns(elapsed);
    }
}

fn log_rescan(sequence: &GeneSequence) {
    tracing::debug!(
        "Rescanned fragments: [{}]",
        sequence
            .fragments()
            .iter()
            .map(|f| format!("{}@{}", f.id(), f.start_index))
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn rejected(operation: &str, err: SequenceError) -> RuntimeError {
    let severity = err.severity();
    if severity.is_internal() {
        tracing::error!(
            "Rejected {}: {} [{}, {}]",
            operation,
            err,
            err.error_code(),
            severity.as_str()
        );
    } else {
        tracing::warn!(
            "Rejected {}: {} [{}, {}{}]",
            operation,
            err,
            err.error_code(),
            severity.as_str(),
            if severity.is_recoverable() {
                ", retry after freeing slots or adding bases"
            } else {
                ""
            }
        );
    }
    RuntimeError::Sequence(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySequenceRepo;
    use gene_core::{StatKind, parse_bases};

    fn lab(bases: &str) -> GeneLab {
        let content = LabContent::embedded().unwrap();
        GeneLab::from_bases(content, parse_bases(bases).unwrap(), None, 7).unwrap()
    }

    #[test]
    fn test_default_capacity_from_tuning() {
        let lab = lab("AAA");
        assert_eq!(lab.sequence().unlocked_slots(), 12);
        assert_eq!(lab.sequence().seed(), 7);
    }

    #[test]
    fn test_replace_breaks_match() {
        let mut lab = lab("AAA");
        assert_eq!(lab.sequence().fragments()[0].id().as_str(), "berserker");

        let record = lab.replace(0, BasePair::T).unwrap();
        assert_eq!(record.before, vec![BasePair::A]);
        assert!(lab.sequence().fragments().is_empty());
        assert_eq!(lab.sequence().mutations().len(), 1);
    }

    #[test]
    fn test_rejected_edit_surfaces_sequence_error() {
        let mut lab = lab("AAA");
        let err = lab.replace(0, BasePair::A).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Sequence(SequenceError::NoOpMutation { index: 0, .. })
        ));
        assert_eq!(err.error_code(), "SEQUENCE_NO_OP_MUTATION");
        assert!(lab.sequence().mutations().is_empty());
    }

    #[test]
    fn test_evaluate_refreshes_life_steal_cache() {
        let mut lab = lab("TATA");
        lab.activate_all();

        let context = BattleContext::new(100).with_hp(40);
        let report = lab.evaluate(&context);

        // vampiric 5 + bloodline 10 (hp 40% < 50%)
        assert_eq!(report.life_steal, 15.0);
        assert_eq!(lab.sequence().total_life_steal(), 15.0);
        assert_eq!(report.stat(StatKind::Attack), None);
    }

    #[test]
    fn test_save_and_load_slot() {
        let repo = InMemorySequenceRepo::new();
        let mut lab = lab("GGGAAA");
        lab.mutate(MutationKind::Point, true).unwrap();
        let digest = lab.save(&repo, "main").unwrap();

        let restored = GeneLab::load(lab.content().clone(), &repo, "main").unwrap();
        assert_eq!(restored.sequence().bases(), lab.sequence().bases());
        assert_eq!(restored.sequence().mutations(), lab.sequence().mutations());
        assert_eq!(restored.sequence().to_save().digest().unwrap(), digest);
    }

    #[test]
    fn test_rejections_carry_severity() {
        let mut lab = lab("AAAA");

        let capacity = lab.insert(0, &[BasePair::G; 9]).unwrap_err();
        assert!(capacity.severity().is_recoverable());
        assert!(!capacity.severity().is_internal());

        let position = lab.delete(4, 1).unwrap_err();
        assert!(!position.severity().is_recoverable());
        assert!(!position.severity().is_internal());

        let unknown = lab.set_active(FragmentInstanceId(999), true).unwrap_err();
        assert!(unknown.severity().is_internal());
        assert_eq!(unknown.error_code(), "SEQUENCE_UNKNOWN_FRAGMENT");
        assert_eq!(lab.sequence().bases(), &[BasePair::A; 4]);
    }

    #[test]
    fn test_missing_slot() {
        let repo = InMemorySequenceRepo::new();
        let content = LabContent::embedded().unwrap();
        let err = GeneLab::load(content, &repo, "nothing").unwrap_err();
        assert!(matches!(err, RuntimeError::SlotNotFound { .. }));
    }
}
