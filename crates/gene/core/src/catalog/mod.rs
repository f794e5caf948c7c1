//! Static fragment catalog and the oracle trait the engine reads it through.
//!
//! The catalog is read-only content: templates are matched against sequences
//! and the rarity table scales stat effects. Concrete catalogs are usually
//! loaded by `gene-content`; tests build them inline.
mod condition;
mod template;

pub use condition::{ExpressionCondition, ThresholdDirection};
pub use template::{
    Dominance, FragmentId, GeneEffect, GeneFragmentTemplate, LifeStealTrigger, Pattern, Rarity,
    StatKind, TemplateError,
};

/// Read-only access to fragment templates and rarity scaling.
pub trait CatalogOracle: Send + Sync {
    /// All templates, in matching order.
    fn templates(&self) -> &[GeneFragmentTemplate];

    /// Stat multiplier applied to fragments of the given rarity.
    fn rarity_multiplier(&self, rarity: Rarity) -> f64;

    /// Looks up a template by id.
    fn template(&self, id: &FragmentId) -> Option<&GeneFragmentTemplate> {
        self.templates().iter().find(|t| &t.id == id)
    }
}

/// Stat multipliers per rarity tier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RarityTable {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityTable {
    pub const STANDARD: Self = Self {
        common: 1.0,
        uncommon: 1.2,
        rare: 1.5,
        epic: 2.0,
        legendary: 3.0,
    };

    pub const fn multiplier(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// In-memory catalog: an ordered template list plus its rarity table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragmentCatalog {
    pub templates: Vec<GeneFragmentTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: RarityTable,
}

impl FragmentCatalog {
    pub fn new(templates: Vec<GeneFragmentTemplate>) -> Self {
        Self {
            templates,
            rarity: RarityTable::STANDARD,
        }
    }

    #[must_use]
    pub fn with_rarity_table(mut self, rarity: RarityTable) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl CatalogOracle for FragmentCatalog {
    fn templates(&self) -> &[GeneFragmentTemplate] {
        &self.templates
    }

    fn rarity_multiplier(&self, rarity: Rarity) -> f64 {
        self.rarity.multiplier(rarity)
    }
}
