//! Data-driven gene content and loaders.
//!
//! This crate ships the standard fragment catalog (RON) and the default
//! mutation tuning (TOML), and provides loaders for custom files in the same
//! formats. Content is consumed by the engine through oracles and never
//! appears in saved sequence state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};
