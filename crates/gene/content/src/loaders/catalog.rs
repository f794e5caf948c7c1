//! Fragment catalog loader.

use std::collections::HashSet;
use std::path::Path;

use gene_core::FragmentCatalog;

use crate::loaders::{LoadResult, read_file};

const STANDARD_CATALOG: &str = include_str!("../../data/fragments.ron");

/// Loader for fragment catalogs stored as RON.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<FragmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// The standard catalog bundled with the crate.
    pub fn embedded() -> LoadResult<FragmentCatalog> {
        Self::parse(STANDARD_CATALOG)
    }

    /// Parse and validate catalog RON.
    ///
    /// Rejects empty patterns and duplicate template ids. Patterns longer than
    /// the pattern capacity fail during deserialization.
    pub fn parse(content: &str) -> LoadResult<FragmentCatalog> {
        let catalog: FragmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for template in &catalog.templates {
            if template.pattern.is_empty() {
                anyhow::bail!("Template '{}' has an empty pattern", template.id);
            }
            if !seen.insert(template.id.as_str()) {
                anyhow::bail!("Duplicate template id '{}'", template.id);
            }
        }
        Ok(catalog)
    }
}
