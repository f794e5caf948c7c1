//! Sequence edit errors.

use super::FragmentInstanceId;
use crate::base::BasePair;
use crate::error::{ErrorSeverity, GeneError};

/// Errors surfaced by sequence edits and fragment-state updates.
///
/// A call that fails leaves bases, fragments and the mutation log untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceError {
    /// Index (or index + count) falls outside the sequence.
    #[error("invalid position {index} for sequence of length {len}")]
    InvalidPosition { index: usize, len: usize },

    /// Explicit replacement with the symbol already present.
    #[error("base unchanged at {index} ({base}), no replacement needed")]
    NoOpMutation { index: usize, base: BasePair },

    /// The edit would need more slots than are unlocked.
    #[error("insufficient sequence capacity: need {required} slots, {capacity} unlocked")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Random mutation requested on a sequence with no bases.
    #[error("sequence is empty, nothing to mutate")]
    EmptySequence,

    /// The sequence never issued this fragment instance (or it was rescanned away).
    #[error("fragment {0} not found in sequence")]
    UnknownFragment(FragmentInstanceId),

    /// The save could not be encoded for digesting.
    #[error("failed to encode sequence save: {0}")]
    Encoding(String),
}

impl GeneError for SequenceError {
    fn severity(&self) -> ErrorSeverity {
        use SequenceError::*;
        match self {
            InvalidPosition { .. } | NoOpMutation { .. } => ErrorSeverity::Validation,
            CapacityExceeded { .. } | EmptySequence => ErrorSeverity::Recoverable,
            UnknownFragment(_) | Encoding(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use SequenceError::*;
        match self {
            InvalidPosition { .. } => "SEQUENCE_INVALID_POSITION",
            NoOpMutation { .. } => "SEQUENCE_NO_OP_MUTATION",
            CapacityExceeded { .. } => "SEQUENCE_CAPACITY_EXCEEDED",
            EmptySequence => "SEQUENCE_EMPTY",
            UnknownFragment(_) => "SEQUENCE_UNKNOWN_FRAGMENT",
            Encoding(_) => "SEQUENCE_ENCODING",
        }
    }
}
