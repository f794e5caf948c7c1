/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneConfig {
    /// Slot capacity used when a caller does not choose one explicitly.
    pub default_capacity: usize,

    /// Upper bound (inclusive) of the d100 outcome roll that maps to a
    /// negative mutation when no stabilizer is used. `0` disables negative
    /// outcomes entirely.
    pub negative_chance_percent: u8,

    /// Shortest span rewritten by a fragment mutation.
    pub fragment_span_min: u8,

    /// Longest span rewritten by a fragment mutation.
    pub fragment_span_max: u8,
}

impl GeneConfig {
    // ===== compile-time constants used as type parameters =====
    /// Longest pattern a fragment template may declare.
    pub const MAX_PATTERN_LEN: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CAPACITY: usize = 12;
    pub const DEFAULT_NEGATIVE_CHANCE_PERCENT: u8 = 30;
    pub const DEFAULT_FRAGMENT_SPAN_MIN: u8 = 2;
    pub const DEFAULT_FRAGMENT_SPAN_MAX: u8 = 4;

    pub fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            negative_chance_percent: Self::DEFAULT_NEGATIVE_CHANCE_PERCENT,
            fragment_span_min: Self::DEFAULT_FRAGMENT_SPAN_MIN,
            fragment_span_max: Self::DEFAULT_FRAGMENT_SPAN_MAX,
        }
    }

    pub fn with_negative_chance(negative_chance_percent: u8) -> Self {
        Self {
            negative_chance_percent: negative_chance_percent.min(100),
            ..Self::new()
        }
    }

    /// Returns the fragment span bounds, ordered and never shorter than one.
    pub fn fragment_span(&self) -> (usize, usize) {
        let min = self.fragment_span_min.max(1) as usize;
        let max = (self.fragment_span_max as usize).max(min);
        (min, max)
    }
}

impl Default for GeneConfig {
    fn default() -> Self {
        Self::new()
    }
}
