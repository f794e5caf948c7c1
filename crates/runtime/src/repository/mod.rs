//! Repository layer for saved sequences.
//!
//! Repositories hold the authoritative [`SequenceSave`](gene_core::SequenceSave)
//! data keyed by slot name. Fragments are never stored; the lab rescans them
//! on load. Static content (catalog, tuning) is handled by
//! [`LabContent`](crate::LabContent), not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSequenceRepository;
pub use memory::InMemorySequenceRepo;
pub use traits::{SequenceRepository, validate_slot};
