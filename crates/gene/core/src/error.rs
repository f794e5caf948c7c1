//! Common error infrastructure for gene-core.
//!
//! Domain-specific errors (e.g. [`SequenceError`](crate::sequence::SequenceError))
//! live next to the operations they validate. This module only defines the
//! shared classification used by callers to decide how to surface a failure.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request was reasonable but cannot apply right now
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected inconsistency that should be investigated
/// - **Fatal**: the sequence cannot be used any further
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error, e.g. not enough unlocked slots for an insert.
    Recoverable,

    /// Validation error, e.g. an index outside the sequence.
    Validation,

    /// Internal error, e.g. a fragment id that the sequence never issued.
    Internal,

    /// Fatal error, e.g. a save whose bases exceed its capacity.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all gene-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity by recoverability, not by impact.
pub trait GeneError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
