//! Static fragment template definitions.

use std::collections::BTreeMap;
use std::fmt;

use arrayvec::ArrayVec;

use super::condition::ExpressionCondition;
use crate::base::BasePair;
use crate::config::GeneConfig;
use crate::error::{ErrorSeverity, GeneError};

/// Fixed-capacity symbol pattern of a template.
pub type Pattern = ArrayVec<BasePair, { GeneConfig::MAX_PATTERN_LEN }>;

/// Stable catalog identifier of a fragment template (e.g. `"berserker"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FragmentId(pub String);

impl FragmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inheritance dominance. Informational only; it never gates expression.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Dominance {
    #[default]
    Dominant,
    Recessive,
    Codominant,
}

/// Five-tier rarity, scaled through the catalog's [`RarityTable`](super::RarityTable).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Combat stats a fragment can modify.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Attack,
    Defense,
    MaxHp,
    Speed,
    CritRate,
    CritDamage,
    Dodge,
}

/// Which hits a life-steal fragment heals from. The battle loop reads this;
/// the evaluator only reports the percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeStealTrigger {
    #[default]
    OnHit,
    OnSkill,
    OnKill,
}

/// Gameplay effect carried by a template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneEffect {
    /// Flat per-stat deltas, scaled by rarity and purity.
    StatBoost { stats: BTreeMap<StatKind, f64> },

    /// Percentage of dealt damage returned as healing.
    LifeSteal {
        base_percent: f64,
        trigger: LifeStealTrigger,
    },
}

impl GeneEffect {
    /// Builds a stat boost from `(stat, delta)` pairs.
    pub fn stat_boost(pairs: impl IntoIterator<Item = (StatKind, f64)>) -> Self {
        Self::StatBoost {
            stats: pairs.into_iter().collect(),
        }
    }

    pub fn life_steal(base_percent: f64) -> Self {
        Self::LifeSteal {
            base_percent,
            trigger: LifeStealTrigger::OnHit,
        }
    }

    pub fn is_life_steal(&self) -> bool {
        matches!(self, Self::LifeSteal { .. })
    }
}

/// Rejected template definitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template '{id}' has an empty pattern")]
    EmptyPattern { id: FragmentId },

    #[error("template '{id}' pattern has {len} symbols, at most {max} allowed")]
    PatternTooLong {
        id: FragmentId,
        len: usize,
        max: usize,
    },
}

impl GeneError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            TemplateError::EmptyPattern { .. } => "TEMPLATE_EMPTY_PATTERN",
            TemplateError::PatternTooLong { .. } => "TEMPLATE_PATTERN_TOO_LONG",
        }
    }
}

/// Catalog entry describing a fragment pattern and what it does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneFragmentTemplate {
    pub id: FragmentId,
    pub name: String,
    pub pattern: Pattern,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dominance: Dominance,
    pub condition: ExpressionCondition,
    pub effect: GeneEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Ticks a fragment rests after firing. `None` means it never rests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: Option<u32>,
}

impl GeneFragmentTemplate {
    /// Creates a template with default dominance, rarity and no cooldown.
    ///
    /// # Errors
    ///
    /// - `EmptyPattern` if `pattern` has no symbols
    /// - `PatternTooLong` if `pattern` exceeds [`GeneConfig::MAX_PATTERN_LEN`]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: &[BasePair],
        condition: ExpressionCondition,
        effect: GeneEffect,
    ) -> Result<Self, TemplateError> {
        let id = FragmentId::new(id);
        if pattern.is_empty() {
            return Err(TemplateError::EmptyPattern { id });
        }
        let pattern = Pattern::try_from(pattern).map_err(|_| TemplateError::PatternTooLong {
            id: id.clone(),
            len: pattern.len(),
            max: GeneConfig::MAX_PATTERN_LEN,
        })?;

        Ok(Self {
            id,
            name: name.into(),
            pattern,
            dominance: Dominance::default(),
            condition,
            effect,
            rarity: Rarity::default(),
            description: String::new(),
            cooldown: None,
        })
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_dominance(mut self, dominance: Dominance) -> Self {
        self.dominance = dominance;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, ticks: u32) -> Self {
        self.cooldown = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
