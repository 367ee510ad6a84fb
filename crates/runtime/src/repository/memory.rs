//! In-memory CharacterRepository implementation for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use charsheet_core::CharacterRecord;

use crate::repository::codec;
use crate::repository::{
    CharacterRepository, RepositoryError, Result, SaveOutcome, validate_slot,
};

/// In-memory implementation of CharacterRepository.
///
/// Slots hold the encoded text, so loads go through the same parser as
/// files do.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    slots: RwLock<BTreeMap<String, String>>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text stored in a slot.
    pub fn raw(&self, slot: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(slot).cloned())
    }

    /// Store raw text in a slot, bypassing the writer's checks.
    pub fn insert_raw(&self, slot: &str, text: impl Into<String>) -> Result<()> {
        validate_slot(slot)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot.to_owned(), text.into());
        Ok(())
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<SaveOutcome> {
        validate_slot(slot)?;

        let text = match codec::encode(record) {
            Ok(text) => text,
            Err(rejection) => {
                tracing::error!("Refusing to save slot '{}': {}", slot, rejection);
                return Ok(SaveOutcome::Rejected(rejection));
            }
        };

        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot.to_owned(), text);

        Ok(SaveOutcome::Saved { path: slot.into() })
    }

    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>> {
        validate_slot(slot)?;
        Ok(self.raw(slot)?.as_deref().and_then(codec::decode))
    }

    fn exists(&self, slot: &str) -> bool {
        if validate_slot(slot).is_err() {
            return false;
        }
        self.slots
            .read()
            .map(|slots| slots.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_core::{Field, create_character};

    #[test]
    fn stores_encoded_text() {
        let repo = InMemoryCharacterRepo::new();
        let record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));

        assert!(repo.save("aria", &record).unwrap().is_saved());

        let raw = repo.raw("aria").unwrap().unwrap();
        assert!(raw.starts_with("Character Name: Aria\nClass: Mage\n"));
        assert_eq!(repo.load("aria").unwrap(), Some(record));
        assert_eq!(repo.list_slots().unwrap(), vec!["aria"]);
    }

    #[test]
    fn raw_text_goes_through_the_parser() {
        let repo = InMemoryCharacterRepo::new();
        repo.insert_raw("hand-edited", "level: 7\nLevel: seven\nNOTES: hi\n")
            .unwrap();
        repo.insert_raw("junk", "nothing useful\n").unwrap();

        let record = repo.load("hand-edited").unwrap().unwrap();
        assert_eq!(record.level, Some(7));
        assert_eq!(record.missing_fields().len(), 6);

        assert_eq!(repo.load("junk").unwrap(), None);
        assert_eq!(repo.load("missing").unwrap(), None);
    }

    #[test]
    fn rejected_save_keeps_previous_text() {
        let repo = InMemoryCharacterRepo::new();
        repo.insert_raw("aria", "Gold: 5\n").unwrap();

        let mut record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));
        record.clear(Field::Gold);

        assert!(!repo.save("aria", &record).unwrap().is_saved());
        assert_eq!(repo.raw("aria").unwrap().as_deref(), Some("Gold: 5\n"));

        repo.delete("aria").unwrap();
        assert!(!repo.exists("aria"));
    }

    #[test]
    fn invalid_slots_are_rejected_everywhere() {
        let repo = InMemoryCharacterRepo::new();
        let record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));

        for bad in ["", "..", "../aria", "saves/aria", " aria"] {
            assert!(matches!(
                repo.save(bad, &record),
                Err(RepositoryError::InvalidSlot(_))
            ));
            assert!(matches!(repo.load(bad), Err(RepositoryError::InvalidSlot(_))));
            assert!(matches!(repo.delete(bad), Err(RepositoryError::InvalidSlot(_))));
            assert!(!repo.exists(bad), "{bad:?} should not exist");
        }
        assert!(repo.list_slots().unwrap().is_empty());
    }
}
