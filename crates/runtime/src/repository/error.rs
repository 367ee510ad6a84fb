//! Error types raised by repository implementations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// Validation problems with a save request are not errors; they are reported
/// through [`SaveOutcome::Rejected`](super::SaveOutcome::Rejected).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid save path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("invalid save slot name: {0:?}")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
