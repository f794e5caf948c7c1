//! Gene sequence store.
//!
//! [`GeneSequence`] is the single mutable root entity. Its fragment list is a
//! derived view of `bases`: every structural edit (through
//! [`GeneEngine`](crate::engine::GeneEngine)) rescans it wholesale, so callers
//! never observe fragments that disagree with the symbols. Runtime fragment
//! state (active flag, purity, cooldown) is updated through the methods here.
mod error;
mod record;
mod save;

pub use error::SequenceError;
pub use record::{MutationKind, MutationRecord, MutationResult};
pub use save::SequenceSave;

use std::fmt;

use crate::base::{BasePair, format_bases};
use crate::catalog::{
    CatalogOracle, ExpressionCondition, FragmentId, GeneEffect, GeneFragmentTemplate, Rarity,
};
use crate::expression::{self, BattleContext};
use crate::matcher::find_fragments;

/// Identifier of one fragment match. Unique within the sequence that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragmentInstanceId(pub u32);

impl fmt::Display for FragmentInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A template bound to a location in a sequence, plus its runtime state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneFragmentInstance {
    pub template: GeneFragmentTemplate,
    pub instance_id: FragmentInstanceId,
    /// Index in `bases` where the pattern begins.
    pub start_index: usize,
    /// 0..=100. Lower purity amplifies the effect.
    pub purity: u8,
    pub is_active: bool,
    pub cooldown_remaining: Option<u32>,
}

impl GeneFragmentInstance {
    pub const FULL_PURITY: u8 = 100;

    /// Fresh match: full purity, inactive, no cooldown.
    pub fn new(
        template: GeneFragmentTemplate,
        instance_id: FragmentInstanceId,
        start_index: usize,
    ) -> Self {
        Self {
            template,
            instance_id,
            start_index,
            purity: Self::FULL_PURITY,
            is_active: false,
            cooldown_remaining: None,
        }
    }

    pub fn id(&self) -> &FragmentId {
        &self.template.id
    }

    pub fn condition(&self) -> &ExpressionCondition {
        &self.template.condition
    }

    pub fn effect(&self) -> &GeneEffect {
        &self.template.effect
    }

    pub fn rarity(&self) -> Rarity {
        self.template.rarity
    }

    /// One past the last index covered by the match.
    pub fn end_index(&self) -> usize {
        self.start_index + self.template.pattern.len()
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown_remaining.is_some_and(|ticks| ticks > 0)
    }
}

/// Ordered base symbols with their derived fragment matches and mutation log.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneSequence {
    pub(crate) bases: Vec<BasePair>,
    pub(crate) unlocked_slots: usize,
    pub(crate) fragments: Vec<GeneFragmentInstance>,
    pub(crate) mutations: Vec<MutationRecord>,
    pub(crate) total_life_steal: f64,
    /// Base seed for mutation rolls. Combined with the mutation nonce.
    pub(crate) seed: u64,
    /// Instance id allocator. Monotonic, never reused.
    pub(crate) next_instance_id: u32,
}

impl GeneSequence {
    /// Creates a sequence and matches its initial fragments.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityExceeded` if `bases` does not fit in
    /// `unlocked_slots`.
    pub fn new<C>(
        bases: Vec<BasePair>,
        unlocked_slots: usize,
        catalog: &C,
    ) -> Result<Self, SequenceError>
    where
        C: CatalogOracle + ?Sized,
    {
        if bases.len() > unlocked_slots {
            return Err(SequenceError::CapacityExceeded {
                required: bases.len(),
                capacity: unlocked_slots,
            });
        }

        let mut sequence = Self {
            bases,
            unlocked_slots,
            fragments: Vec::new(),
            mutations: Vec::new(),
            total_life_steal: 0.0,
            seed: 0,
            next_instance_id: 0,
        };
        sequence.rescan(catalog);
        Ok(sequence)
    }

    /// Creates an empty sequence with the given capacity.
    pub fn empty(unlocked_slots: usize) -> Self {
        Self {
            bases: Vec::new(),
            unlocked_slots,
            fragments: Vec::new(),
            mutations: Vec::new(),
            total_life_steal: 0.0,
            seed: 0,
            next_instance_id: 0,
        }
    }

    /// Sets the base seed used for random mutation rolls.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn bases(&self) -> &[BasePair] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn unlocked_slots(&self) -> usize {
        self.unlocked_slots
    }

    /// Slots still available for insertion.
    pub fn free_slots(&self) -> usize {
        self.unlocked_slots - self.bases.len()
    }

    pub fn fragments(&self) -> &[GeneFragmentInstance] {
        &self.fragments
    }

    pub fn mutations(&self) -> &[MutationRecord] {
        &self.mutations
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Life steal cached by the last [`refresh_life_steal`](Self::refresh_life_steal).
    pub fn total_life_steal(&self) -> f64 {
        self.total_life_steal
    }

    pub fn fragment(&self, id: FragmentInstanceId) -> Option<&GeneFragmentInstance> {
        self.fragments.iter().find(|f| f.instance_id == id)
    }

    /// Latches the active flag of one fragment.
    pub fn set_fragment_active(
        &mut self,
        id: FragmentInstanceId,
        active: bool,
    ) -> Result<(), SequenceError> {
        self.fragment_mut(id)?.is_active = active;
        Ok(())
    }

    /// Latches the active flag of every fragment.
    pub fn set_all_active(&mut self, active: bool) {
        for fragment in &mut self.fragments {
            fragment.is_active = active;
        }
    }

    /// Overrides the purity of one fragment, clamped to 0..=100.
    pub fn set_fragment_purity(
        &mut self,
        id: FragmentInstanceId,
        purity: u8,
    ) -> Result<(), SequenceError> {
        self.fragment_mut(id)?.purity = purity.min(GeneFragmentInstance::FULL_PURITY);
        Ok(())
    }

    /// Starts the template cooldown of a fragment that just fired.
    ///
    /// Returns the cooldown now pending (`None` if the template has none).
    pub fn trigger_fragment(
        &mut self,
        id: FragmentInstanceId,
    ) -> Result<Option<u32>, SequenceError> {
        let fragment = self.fragment_mut(id)?;
        fragment.cooldown_remaining = fragment.template.cooldown.filter(|ticks| *ticks > 0);
        Ok(fragment.cooldown_remaining)
    }

    /// Advances every pending cooldown by `elapsed` ticks.
    pub fn tick_cooldowns(&mut self, elapsed: u32) {
        for fragment in &mut self.fragments {
            fragment.cooldown_remaining = fragment
                .cooldown_remaining
                .map(|ticks| ticks.saturating_sub(elapsed))
                .filter(|ticks| *ticks > 0);
        }
    }

    /// Recomputes and caches the total life steal for a battle snapshot.
    pub fn refresh_life_steal(&mut self, context: &BattleContext) -> f64 {
        self.total_life_steal = expression::calculate_total_life_steal(&self.fragments, context);
        self.total_life_steal
    }

    /// Replaces the fragment list with a fresh scan of the current bases.
    pub(crate) fn rescan<C>(&mut self, catalog: &C)
    where
        C: CatalogOracle + ?Sized,
    {
        let fragments = find_fragments(
            &self.bases,
            catalog,
            FragmentInstanceId(self.next_instance_id),
        );
        self.next_instance_id = self
            .next_instance_id
            .wrapping_add(fragments.len() as u32);
        self.fragments = fragments;
    }

    fn fragment_mut(
        &mut self,
        id: FragmentInstanceId,
    ) -> Result<&mut GeneFragmentInstance, SequenceError> {
        self.fragments
            .iter_mut()
            .find(|f| f.instance_id == id)
            .ok_or(SequenceError::UnknownFragment(id))
    }
}

impl fmt::Display for GeneSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            format_bases(&self.bases),
            self.bases.len(),
            self.unlocked_slots
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::parse_bases;
    use crate::test_utils::test_catalog;

    #[test]
    fn new_rejects_overfull_sequences() {
        let err = GeneSequence::new(parse_bases("AAAA").unwrap(), 3, &test_catalog()).unwrap_err();
        assert_eq!(
            err,
            SequenceError::CapacityExceeded {
                required: 4,
                capacity: 3
            }
        );
    }

    #[test]
    fn new_matches_initial_fragments() {
        let sequence = GeneSequence::new(parse_bases("AAA").unwrap(), 12, &test_catalog()).unwrap();
        assert_eq!(sequence.fragments().len(), 1);
        assert_eq!(sequence.fragments()[0].id().as_str(), "berserker");
        assert_eq!(sequence.free_slots(), 9);
        assert!(sequence.mutations().is_empty());
        assert_eq!(sequence.to_string(), "AAA (3/12)");
    }

    #[test]
    fn fragment_state_updates() {
        let mut sequence =
            GeneSequence::new(parse_bases("GCGC").unwrap(), 12, &test_catalog()).unwrap();
        let id = sequence.fragments()[0].instance_id;

        sequence.set_fragment_active(id, true).unwrap();
        sequence.set_fragment_purity(id, 250).unwrap();
        let fragment = sequence.fragment(id).unwrap();
        assert!(fragment.is_active);
        assert_eq!(fragment.purity, 100);

        assert_eq!(
            sequence.set_fragment_active(FragmentInstanceId(999), true),
            Err(SequenceError::UnknownFragment(FragmentInstanceId(999)))
        );
    }

    #[test]
    fn cooldowns_start_and_saturate() {
        let mut sequence =
            GeneSequence::new(parse_bases("GCGC").unwrap(), 12, &test_catalog()).unwrap();
        let id = sequence.fragments()[0].instance_id;

        assert_eq!(sequence.trigger_fragment(id).unwrap(), Some(30));
        assert!(sequence.fragment(id).unwrap().is_on_cooldown());

        sequence.tick_cooldowns(10);
        assert_eq!(sequence.fragment(id).unwrap().cooldown_remaining, Some(20));

        sequence.tick_cooldowns(50);
        assert_eq!(sequence.fragment(id).unwrap().cooldown_remaining, None);
        assert!(!sequence.fragment(id).unwrap().is_on_cooldown());
    }

    #[test]
    fn instance_ids_are_never_reused_across_rescans() {
        let catalog = test_catalog();
        let mut sequence = GeneSequence::new(parse_bases("AAA").unwrap(), 12, &catalog).unwrap();
        let first = sequence.fragments()[0].instance_id;
        sequence.rescan(&catalog);
        let second = sequence.fragments()[0].instance_id;
        assert_ne!(first, second);
    }
}
