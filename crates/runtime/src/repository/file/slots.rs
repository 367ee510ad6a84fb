//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use charsheet_core::CharacterRecord;

use crate::repository::file::{load_character, save_character};
use crate::repository::{
    CharacterRepository, RepositoryError, Result, SaveOutcome, validate_slot,
};

/// File-based implementation of CharacterRepository.
///
/// Each slot is stored as `{slot}.{extension}` inside `base_dir`, using the
/// same text format as [`save_character`].
pub struct FileCharacterRepository {
    base_dir: PathBuf,
    extension: String,
}

impl FileCharacterRepository {
    pub const DEFAULT_EXTENSION: &'static str = "txt";

    /// Create a new file-based repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_extension(base_dir, Self::DEFAULT_EXTENSION)
    }

    /// Create a repository whose slot files use `extension`.
    pub fn with_extension(base_dir: impl AsRef<Path>, extension: impl Into<String>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            extension: extension.into(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a slot file.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        validate_slot(slot)?;
        Ok(self
            .base_dir
            .join(format!("{}.{}", slot, self.extension)))
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<SaveOutcome> {
        let path = self.slot_path(slot)?;
        let outcome = save_character(record, &path)?;

        if outcome.is_saved() {
            tracing::info!("Saved slot '{}' to {}", slot, path.display());
        }

        Ok(outcome)
    }

    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>> {
        let path = self.slot_path(slot)?;
        load_character(&path)
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted slot '{}'", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();
        let suffix = format!(".{}", self.extension);

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.is_file()
                && let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename.strip_suffix(suffix.as_str())
                && validate_slot(slot).is_ok()
                && !slot.starts_with('.')
            {
                slots.push(slot.to_string());
            }
        }

        slots.sort();
        Ok(slots)
    }
}
