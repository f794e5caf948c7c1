//! Runtime wiring for the gene-sequence engine.
//!
//! This crate loads content, owns a live [`GeneSequence`](gene_core::GeneSequence)
//! behind the [`GeneLab`] facade and persists sequences through repositories.
//!
//! Modules are organized by responsibility:
//! - [`lab`] hosts the facade that drives edits, mutations and evaluation
//! - [`content`] bundles the catalog, tuning and RNG the engine reads
//! - [`config`] reads process configuration
//! - [`repository`] provides save-slot storage
pub mod config;
pub mod content;
pub mod error;
pub mod lab;
pub mod repository;

pub use config::LabConfig;
pub use content::LabContent;
pub use error::{Result, RuntimeError};
pub use lab::GeneLab;
pub use repository::{
    FileSequenceRepository, InMemorySequenceRepo, RepositoryError, SequenceRepository,
};
