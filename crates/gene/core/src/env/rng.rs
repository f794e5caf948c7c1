//! Seed-addressed RNG oracle for mutation rolls.
//!
//! Every draw is a pure function of its seed, so a sequence replayed from the
//! same save and the same calls mutates identically. Tests swap in their own
//! oracle to force specific rolls.

/// Deterministic random source.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random index in `[0, len)`. Returns 0 when `len` is 0.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Independent draws taken while applying one random mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    /// Target position (or span start).
    Position = 0,
    /// Span length for fragment mutations.
    SpanLength = 1,
    /// Outcome roll deciding positive vs negative.
    Outcome = 2,
    /// Replacement symbols; the symbol offset is added on top.
    Symbol = 16,
}

/// Derives a seed unique to one draw of one mutation.
///
/// * `sequence_seed` - base seed stored on the sequence
/// * `nonce` - mutation number (length of the mutation log before the call)
/// * `context` - which draw inside the mutation, see [`RollContext`]
pub fn compute_seed(sequence_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = sequence_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // SplitMix64-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn seeds_differ_per_context_and_nonce() {
        let a = compute_seed(7, 0, RollContext::Position as u32);
        let b = compute_seed(7, 0, RollContext::Outcome as u32);
        let c = compute_seed(7, 1, RollContext::Position as u32);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rolls_stay_in_bounds() {
        let rng = PcgRng;
        for seed in 0..500 {
            let roll = rng.roll_d100(seed);
            assert!((1..=100).contains(&roll));
            assert!(rng.index(seed, 5) < 5);
            assert!((2..=4).contains(&rng.range(seed, 2, 4)));
        }
        assert_eq!(rng.index(1, 0), 0);
    }
}
