//! Mutation engine.
//!
//! [`GeneEngine`] is the only writer of a sequence's bases. Every successful
//! structural edit ends with a full fragment rescan, so the fragment list is
//! never observable out of step with the symbols. Failed edits return before
//! touching anything.

mod random;

use crate::base::BasePair;
use crate::env::GeneEnv;
use crate::sequence::{
    GeneSequence, MutationKind, MutationRecord, MutationResult, SequenceError,
};

/// Borrowing reducer over one [`GeneSequence`].
pub struct GeneEngine<'a> {
    sequence: &'a mut GeneSequence,
}

impl<'a> GeneEngine<'a> {
    pub fn new(sequence: &'a mut GeneSequence) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &GeneSequence {
        self.sequence
    }

    /// Rewrites one symbol and logs a point mutation.
    ///
    /// # Errors
    ///
    /// - `InvalidPosition` if `index` is not inside the sequence
    /// - `NoOpMutation` if `base` is already at `index`
    pub fn replace_base(
        &mut self,
        env: GeneEnv<'_>,
        index: usize,
        base: BasePair,
    ) -> Result<MutationRecord, SequenceError> {
        let len = self.sequence.bases.len();
        let current = *self
            .sequence
            .bases
            .get(index)
            .ok_or(SequenceError::InvalidPosition { index, len })?;
        if current == base {
            return Err(SequenceError::NoOpMutation { index, base });
        }

        self.sequence.bases[index] = base;
        let record = MutationRecord {
            kind: MutationKind::Point,
            result: MutationResult::Positive,
            position: index,
            before: vec![current],
            after: vec![base],
            stabilized: false,
            nonce: self.nonce(),
        };
        Ok(self.commit(env, record))
    }

    /// Splices `bases` in before `index`. Inserting at `len` appends.
    ///
    /// # Errors
    ///
    /// - `InvalidPosition` if `index > len`
    /// - `CapacityExceeded` if the result would not fit in the unlocked slots
    pub fn insert_bases(
        &mut self,
        env: GeneEnv<'_>,
        index: usize,
        bases: &[BasePair],
    ) -> Result<(), SequenceError> {
        let len = self.sequence.bases.len();
        if index > len {
            return Err(SequenceError::InvalidPosition { index, len });
        }
        let required = len + bases.len();
        if required > self.sequence.unlocked_slots {
            return Err(SequenceError::CapacityExceeded {
                required,
                capacity: self.sequence.unlocked_slots,
            });
        }

        self.sequence
            .bases
            .splice(index..index, bases.iter().copied());
        self.sequence.rescan(env.catalog());
        Ok(())
    }

    /// Removes `count` symbols starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if `index` is not inside the sequence or the
    /// range runs past its end.
    pub fn delete_bases(
        &mut self,
        env: GeneEnv<'_>,
        index: usize,
        count: usize,
    ) -> Result<(), SequenceError> {
        let len = self.sequence.bases.len();
        let end = index
            .checked_add(count)
            .filter(|end| index < len && *end <= len)
            .ok_or(SequenceError::InvalidPosition { index, len })?;

        self.sequence.bases.drain(index..end);
        self.sequence.rescan(env.catalog());
        Ok(())
    }

    /// Applies a random point or fragment mutation.
    ///
    /// Targets are drawn from the env RNG and always valid. The outcome roll
    /// lands on [`MutationResult::Negative`] when it falls at or under the
    /// configured chance, unless `use_stabilizer` forces a positive result.
    /// Exactly one record is appended per call.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if there are no bases to mutate.
    pub fn apply_mutation(
        &mut self,
        env: GeneEnv<'_>,
        kind: MutationKind,
        use_stabilizer: bool,
    ) -> Result<MutationRecord, SequenceError> {
        if self.sequence.bases.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let nonce = self.nonce();
        let roller = random::MutationRoller::new(env, self.sequence.seed, nonce);
        let (position, after) = match kind {
            MutationKind::Point => roller.point(self.sequence.bases.len()),
            MutationKind::Fragment => roller.fragment(self.sequence.bases.len()),
        };
        let result = roller.outcome(use_stabilizer);

        let span = position..position + after.len();
        let before = self.sequence.bases[span.clone()].to_vec();
        self.sequence.bases[span].copy_from_slice(&after);

        let record = MutationRecord {
            kind,
            result,
            position,
            before,
            after,
            stabilized: use_stabilizer,
            nonce,
        };
        Ok(self.commit(env, record))
    }

    fn nonce(&self) -> u64 {
        self.sequence.mutations.len() as u64
    }

    /// Appends the record, rescans, and hands a copy back to the caller.
    fn commit(&mut self, env: GeneEnv<'_>, record: MutationRecord) -> MutationRecord {
        self.sequence.mutations.push(record.clone());
        self.sequence.rescan(env.catalog());
        record
    }
}
