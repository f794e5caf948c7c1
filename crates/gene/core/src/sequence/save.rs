//! Plain-data save form of a [`GeneSequence`].
//!
//! Only the authoritative fields are stored. Fragments are a derived view and
//! are rebuilt by the matcher on load, never trusted from storage.

use super::{GeneSequence, MutationRecord, SequenceError};
use crate::base::BasePair;
use crate::catalog::CatalogOracle;

/// Serializable snapshot of the authoritative sequence state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSave {
    pub bases: Vec<BasePair>,
    pub unlocked_slots: usize,
    pub mutations: Vec<MutationRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

impl SequenceSave {
    /// SHA-256 over the bincode encoding of this save.
    ///
    /// Identical saves always produce identical digests, so the digest can be
    /// logged and compared after a store/load cycle.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Encoding` if bincode rejects the save.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], SequenceError> {
        use sha2::{Digest, Sha256};

        let bytes =
            bincode::serialize(self).map_err(|e| SequenceError::Encoding(e.to_string()))?;
        Ok(Sha256::digest(&bytes).into())
    }
}

impl GeneSequence {
    /// Extracts the authoritative state for persistence.
    pub fn to_save(&self) -> SequenceSave {
        SequenceSave {
            bases: self.bases.clone(),
            unlocked_slots: self.unlocked_slots,
            mutations: self.mutations.clone(),
            seed: self.seed,
        }
    }

    /// Rebuilds a sequence from saved data, rescanning its fragments.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityExceeded` if the saved bases exceed the
    /// saved capacity.
    pub fn from_save<C>(save: SequenceSave, catalog: &C) -> Result<Self, SequenceError>
    where
        C: CatalogOracle + ?Sized,
    {
        let SequenceSave {
            bases,
            unlocked_slots,
            mutations,
            seed,
        } = save;

        let mut sequence = GeneSequence::new(bases, unlocked_slots, catalog)?.with_seed(seed);
        sequence.mutations = mutations;
        Ok(sequence)
    }
}
