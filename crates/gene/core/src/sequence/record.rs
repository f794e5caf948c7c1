use crate::base::BasePair;

/// Shape of a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MutationKind {
    /// One symbol rewritten.
    Point,
    /// A contiguous span rewritten.
    Fragment,
}

/// Outcome branch of a mutation roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MutationResult {
    Positive,
    Negative,
}

/// Audit entry appended to a sequence's mutation log.
///
/// Records what changed, not how to undo it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    pub kind: MutationKind,
    pub result: MutationResult,
    /// First index touched.
    pub position: usize,
    /// Symbols at `position..` before the mutation.
    pub before: Vec<BasePair>,
    /// Symbols at `position..` after the mutation.
    pub after: Vec<BasePair>,
    /// Whether a stabilizer was consumed.
    pub stabilized: bool,
    /// Position of this record in the log.
    pub nonce: u64,
}

impl MutationRecord {
    pub fn is_positive(&self) -> bool {
        self.result == MutationResult::Positive
    }

    /// Span length covered by this record.
    pub fn len(&self) -> usize {
        self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.after.is_empty()
    }

    /// True when the rolled symbols equal the originals (an absorbed no-op).
    pub fn is_silent(&self) -> bool {
        self.before == self.after
    }
}
