//! In-memory SequenceRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use gene_core::SequenceSave;

use super::{RepositoryError, Result, SequenceRepository, validate_slot};

/// In-memory implementation of SequenceRepository.
pub struct InMemorySequenceRepo {
    saves: RwLock<HashMap<String, SequenceSave>>,
}

impl InMemorySequenceRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            saves: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySequenceRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceRepository for InMemorySequenceRepo {
    fn save(&self, slot: &str, save: &SequenceSave) -> Result<()> {
        validate_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot.to_string(), save.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SequenceSave>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut slots: Vec<String> = saves.keys().cloned().collect();
        slots.sort_unstable();
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gene_core::BasePair;

    fn save(bases: &[BasePair]) -> SequenceSave {
        SequenceSave {
            bases: bases.to_vec(),
            unlocked_slots: 8,
            mutations: Vec::new(),
            seed: 3,
        }
    }

    #[test]
    fn test_save_load_delete() {
        let repo = InMemorySequenceRepo::new();
        assert!(repo.load("main").unwrap().is_none());

        repo.save("main", &save(&[BasePair::A])).unwrap();
        repo.save("alt", &save(&[BasePair::G])).unwrap();
        assert!(repo.exists("main"));
        assert_eq!(repo.load("main").unwrap(), Some(save(&[BasePair::A])));
        assert_eq!(repo.list_slots().unwrap(), vec!["alt", "main"]);

        repo.save("main", &save(&[BasePair::T])).unwrap();
        assert_eq!(repo.load("main").unwrap(), Some(save(&[BasePair::T])));

        repo.delete("main").unwrap();
        assert!(!repo.exists("main"));
        repo.delete("main").unwrap();
    }

    #[test]
    fn test_rejects_invalid_slot() {
        let repo = InMemorySequenceRepo::new();
        let err = repo.save("no/slash", &save(&[])).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidSlot(_)));
    }
}
