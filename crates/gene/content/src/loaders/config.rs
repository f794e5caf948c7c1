//! Mutation tuning loader.

use std::path::Path;

use gene_core::GeneConfig;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GeneConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// The default tuning bundled with the crate.
    pub fn embedded() -> LoadResult<GeneConfig> {
        Self::parse(DEFAULT_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<GeneConfig> {
        let config: GeneConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.negative_chance_percent > 100 {
            anyhow::bail!(
                "negative_chance_percent must be at most 100 (got {})",
                config.negative_chance_percent
            );
        }

        Ok(config)
    }
}
