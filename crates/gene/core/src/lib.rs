//! Deterministic gene-sequence rules shared by the runtime and tooling.
//!
//! `gene-core` owns the canonical sequence model, the pattern matcher, the
//! mutation engine and the expression evaluator. All structural edits flow
//! through [`engine::GeneEngine`]; battle code reads fragment effects through
//! the functions in [`expression`].
pub mod base;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod expression;
pub mod matcher;
pub mod sequence;

#[cfg(test)]
mod test_utils;

pub use base::{BasePair, ParseBaseError, format_bases, parse_bases};
pub use catalog::{
    CatalogOracle, Dominance, ExpressionCondition, FragmentCatalog, FragmentId, GeneEffect,
    GeneFragmentTemplate, LifeStealTrigger, Rarity, RarityTable, StatKind, TemplateError,
    ThresholdDirection,
};
pub use config::GeneConfig;
pub use engine::GeneEngine;
pub use env::{GeneEnv, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GeneError};
pub use expression::{
    BattleContext, ExpressionReport, calculate_gene_stats, calculate_total_life_steal,
    check_expression_condition, evaluate, get_active_gene_effects, purity_factor,
};
pub use matcher::find_fragments;
pub use sequence::{
    FragmentInstanceId, GeneFragmentInstance, GeneSequence, MutationKind, MutationRecord,
    MutationResult, SequenceError, SequenceSave,
};
