//! Static content the engine reads through oracles.
//!
//! [`LabContent`] bundles the fragment catalog, the tuning config and the RNG
//! so the lab can build a [`GeneEnv`] on demand. The data is immutable at
//! runtime; sequence state lives in [`GeneLab`](crate::GeneLab) and the
//! repositories.
use std::sync::Arc;

use gene_content::{CatalogLoader, ConfigLoader};
use gene_core::{FragmentCatalog, GeneConfig, GeneEnv, PcgRng};

use crate::config::LabConfig;
use crate::error::Result;

/// Shared, read-only engine inputs.
#[derive(Clone, Debug)]
pub struct LabContent {
    catalog: Arc<FragmentCatalog>,
    config: Arc<GeneConfig>,
    rng: PcgRng,
}

impl LabContent {
    pub fn new(catalog: FragmentCatalog, config: GeneConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            rng: PcgRng,
        }
    }

    /// The bundled catalog and tuning.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(CatalogLoader::embedded()?, ConfigLoader::embedded()?))
    }

    /// Loads content, preferring the files named in `config`.
    pub fn from_config(config: &LabConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => CatalogLoader::load(path)?,
            None => CatalogLoader::embedded()?,
        };
        let tuning = match &config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };

        tracing::debug!(
            "Loaded content: {} templates, negative chance {}%",
            catalog.len(),
            tuning.negative_chance_percent
        );

        Ok(Self::new(catalog, tuning))
    }

    pub fn catalog(&self) -> &FragmentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GeneConfig {
        &self.config
    }

    /// Borrows the content as an engine env.
    pub fn as_env(&self) -> GeneEnv<'_> {
        GeneEnv::new(self.catalog.as_ref(), &self.rng, self.config.as_ref())
    }
}
