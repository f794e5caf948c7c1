//! Target and outcome draws for random mutations.

use crate::base::BasePair;
use crate::env::{GeneEnv, RollContext, compute_seed};
use crate::sequence::MutationResult;

/// Draws for a single mutation, keyed by `(sequence seed, nonce)`.
pub(super) struct MutationRoller<'a> {
    env: GeneEnv<'a>,
    seed: u64,
    nonce: u64,
}

impl<'a> MutationRoller<'a> {
    pub(super) fn new(env: GeneEnv<'a>, seed: u64, nonce: u64) -> Self {
        Self { env, seed, nonce }
    }

    fn seed_for(&self, context: u32) -> u64 {
        compute_seed(self.seed, self.nonce, context)
    }

    fn symbol(&self, offset: usize) -> BasePair {
        let seed = self.seed_for(RollContext::Symbol as u32 + offset as u32);
        BasePair::from_draw(self.env.rng().next_u32(seed))
    }

    /// One position, one fresh symbol (possibly the same one).
    pub(super) fn point(&self, len: usize) -> (usize, Vec<BasePair>) {
        let position = self
            .env
            .rng()
            .index(self.seed_for(RollContext::Position as u32), len);
        (position, vec![self.symbol(0)])
    }

    /// A span clamped to `len`, each symbol redrawn independently.
    pub(super) fn fragment(&self, len: usize) -> (usize, Vec<BasePair>) {
        let (min, max) = self.env.config().fragment_span();
        let span = self.env.rng().range(
            self.seed_for(RollContext::SpanLength as u32),
            min.min(len) as u32,
            max.min(len) as u32,
        ) as usize;
        let position = self
            .env
            .rng()
            .index(self.seed_for(RollContext::Position as u32), len - span + 1);
        (position, (0..span).map(|offset| self.symbol(offset)).collect())
    }

    /// Drawn whether or not the stabilizer is used.
    pub(super) fn outcome(&self, use_stabilizer: bool) -> MutationResult {
        let roll = self
            .env
            .rng()
            .roll_d100(self.seed_for(RollContext::Outcome as u32));
        if !use_stabilizer && roll <= u32::from(self.env.config().negative_chance_percent) {
            MutationResult::Negative
        } else {
            MutationResult::Positive
        }
    }
}
