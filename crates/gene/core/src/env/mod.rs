//! Read-only collaborators injected into engine calls.
//!
//! [`GeneEnv`] bundles the fragment catalog, the RNG oracle and the tuning
//! config so the engine can mutate a sequence without owning any of them.
mod rng;

pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

use crate::catalog::CatalogOracle;
use crate::config::GeneConfig;

/// Borrowed view of everything the engine reads but never mutates.
#[derive(Clone, Copy)]
pub struct GeneEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    rng: &'a dyn RngOracle,
    config: &'a GeneConfig,
}

impl<'a> GeneEnv<'a> {
    pub fn new(
        catalog: &'a dyn CatalogOracle,
        rng: &'a dyn RngOracle,
        config: &'a GeneConfig,
    ) -> Self {
        Self {
            catalog,
            rng,
            config,
        }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GeneConfig {
        self.config
    }
}

impl core::fmt::Debug for GeneEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeneEnv")
            .field("templates", &self.catalog.templates().len())
            .field("config", self.config)
            .finish()
    }
}
