//! Base-pair symbols and helpers for reading/writing symbol strings.

use crate::error::{ErrorSeverity, GeneError};

/// One of the four symbols composing a gene sequence.
///
/// The variants carry no numeric ordering; they are compared by identity only.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum BasePair {
    A,
    T,
    G,
    C,
}

impl BasePair {
    /// All symbols, in the order used when drawing a random symbol.
    pub const ALL: [BasePair; 4] = [BasePair::A, BasePair::T, BasePair::G, BasePair::C];

    /// Maps an arbitrary draw onto a symbol (uniform for uniform draws).
    #[inline]
    pub const fn from_draw(draw: u32) -> Self {
        Self::ALL[(draw % 4) as usize]
    }

    /// Returns the single-letter form of this symbol.
    pub const fn as_char(self) -> char {
        match self {
            BasePair::A => 'A',
            BasePair::T => 'T',
            BasePair::G => 'G',
            BasePair::C => 'C',
        }
    }
}

impl TryFrom<char> for BasePair {
    type Error = ParseBaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(BasePair::A),
            'T' => Ok(BasePair::T),
            'G' => Ok(BasePair::G),
            'C' => Ok(BasePair::C),
            _ => Err(ParseBaseError::InvalidSymbol { symbol: c }),
        }
    }
}

/// Errors raised when decoding a symbol string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBaseError {
    #[error("invalid base symbol '{symbol}'")]
    InvalidSymbol { symbol: char },
}

impl GeneError for ParseBaseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "BASE_INVALID_SYMBOL"
    }
}

/// Parses a symbol string such as `"TATA"`. Whitespace is ignored.
pub fn parse_bases(input: &str) -> Result<Vec<BasePair>, ParseBaseError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(BasePair::try_from)
        .collect()
}

/// Renders symbols back to their compact string form.
pub fn format_bases(bases: &[BasePair]) -> String {
    bases.iter().map(|b| b.as_char()).collect()
}
