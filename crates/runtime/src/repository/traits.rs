//! Repository contract for saving and loading sequences.

use gene_core::SequenceSave;

use super::{RepositoryError, Result};

/// Storage for sequence saves, indexed by slot name.
pub trait SequenceRepository: Send + Sync {
    /// Save a sequence into a slot, replacing any previous save.
    fn save(&self, slot: &str, save: &SequenceSave) -> Result<()>;

    /// Load the save in a slot, if any.
    fn load(&self, slot: &str) -> Result<Option<SequenceSave>>;

    /// Check if a slot holds a save.
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List occupied slots, sorted.
    fn list_slots(&self) -> Result<Vec<String>>;
}

/// Slot names double as file stems, so they are kept to a portable charset.
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_string()))
    }
}
