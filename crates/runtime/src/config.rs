//! Lab configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a [`GeneLab`](crate::GeneLab).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabConfig {
    /// Base seed for new sequences. Random when unset.
    pub seed: Option<u64>,
    /// Slot capacity for new sequences. Falls back to the tuning default.
    pub capacity: Option<usize>,
    /// Custom fragment catalog (RON). The embedded catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Custom tuning file (TOML). The embedded tuning is used when unset.
    pub config_path: Option<PathBuf>,
    /// Directory for save slots. Platform data dir when unset.
    pub save_dir: Option<PathBuf>,
}

impl LabConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GENE_SEED` - Base seed for new sequences (default: random)
    /// - `GENE_CAPACITY` - Unlocked slots for new sequences (default: from tuning)
    /// - `GENE_CATALOG` - Path to a fragment catalog RON file
    /// - `GENE_CONFIG` - Path to a tuning TOML file
    /// - `GENE_SAVE_DIR` - Directory for save slots (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            seed: read("GENE_SEED").and_then(|v| v.trim().parse().ok()),
            capacity: read("GENE_CAPACITY").and_then(|v| v.trim().parse().ok()),
            catalog_path: read("GENE_CATALOG").map(PathBuf::from),
            config_path: read("GENE_CONFIG").map(PathBuf::from),
            save_dir: read("GENE_SAVE_DIR").map(PathBuf::from),
        }
    }

    /// Resolved save directory.
    ///
    /// Follows platform conventions when `save_dir` is unset:
    /// - macOS: `~/Library/Application Support/genelab/sequences`
    /// - Linux: `~/.local/share/genelab/sequences`
    /// - Windows: `%APPDATA%\genelab\sequences`
    /// - Fallback: `./save_data/sequences`
    pub fn save_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_dir {
            return dir.clone();
        }

        directories::ProjectDirs::from("", "", "genelab")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
            .join("sequences")
    }

    /// Seed for a new sequence: the configured one, or a fresh random draw.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
