//! Result types shared by the save/load operations.

use std::path::{Path, PathBuf};

use charsheet_core::Field;
use thiserror::Error;

use crate::repository::{RepositoryError, Result};

/// Reason a save request was refused before anything was written.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SaveRejection {
    #[error("character data is missing the required field '{0}'")]
    MissingField(Field),

    #[error("field '{0}' contains a line break")]
    InvalidValue(Field),

    #[error("directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Result of a save request that did not hit an I/O fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// All seven lines were written to `path`.
    Saved { path: PathBuf },
    /// Pre-checks failed; the target was left untouched.
    Rejected(SaveRejection),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    pub fn rejection(&self) -> Option<&SaveRejection> {
        match self {
            Self::Saved { .. } => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved { path } => Some(path),
            Self::Rejected(_) => None,
        }
    }
}

/// Check that a slot name maps to a single file inside the save directory.
pub fn validate_slot(slot: &str) -> Result<()> {
    let invalid = slot.is_empty()
        || slot == "."
        || slot == ".."
        || slot.contains(['/', '\\'])
        || slot.trim() != slot;

    if invalid {
        return Err(RepositoryError::InvalidSlot(slot.to_owned()));
    }
    Ok(())
}
