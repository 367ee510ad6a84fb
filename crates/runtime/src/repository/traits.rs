//! Repository contract for named character save slots.

use charsheet_core::CharacterRecord;

use crate::repository::{Result, SaveOutcome};

/// Repository for character persistence keyed by slot name.
///
/// Slot names are validated with [`validate_slot`](super::validate_slot);
/// invalid names fail with [`RepositoryError::InvalidSlot`](super::RepositoryError::InvalidSlot).
pub trait CharacterRepository: Send + Sync {
    /// Save a record into a slot, replacing any previous content.
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<SaveOutcome>;

    /// Load a slot. `None` if the slot is empty or holds no recognizable field.
    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>>;

    /// Check if a slot exists
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an absent slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slot names, sorted.
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
