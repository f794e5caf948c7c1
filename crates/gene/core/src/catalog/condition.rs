//! Expression conditions gating when a matched fragment takes effect.

/// Direction of an HP threshold comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdDirection {
    /// Satisfied while HP is strictly below the threshold.
    Below,
    /// Satisfied while HP is strictly above the threshold.
    Above,
}

/// Runtime predicate over a battle snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionCondition {
    /// Always expressed.
    Always,

    /// Current HP compared against a percentage of max HP.
    HpThreshold {
        direction: ThresholdDirection,
        percent: u8,
    },

    /// Combo counter reached a minimum.
    Combo { min: u32 },

    /// At least one kill during the evaluated tick.
    OnKill,

    /// The incoming hit would be fatal.
    OnFatalDamage,

    /// The previous action was a skill.
    OnSkill,

    /// The previous action was a dodge.
    OnDodge,

    /// Accumulated damage taken reached a minimum.
    DamageTaken { min: u32 },

    /// The battle has lasted at least this many seconds.
    BattleTime { min_seconds: u32 },
}

impl ExpressionCondition {
    pub const fn hp_below(percent: u8) -> Self {
        Self::HpThreshold {
            direction: ThresholdDirection::Below,
            percent,
        }
    }

    pub const fn hp_above(percent: u8) -> Self {
        Self::HpThreshold {
            direction: ThresholdDirection::Above,
            percent,
        }
    }
}
