//! Persistence for character records.
//!
//! This crate stores [`charsheet_core`] characters as flat `<Label>: <value>`
//! text files and reads them back, tolerating partial or hand-edited files.
//!
//! - [`repository`] hosts the codec, the single-file writer/reader, and slot
//!   repositories
//! - [`config`] resolves the save directory from the environment
pub mod config;
pub mod repository;

pub use config::{RuntimeConfig, default_save_dir};
pub use repository::{
    CharacterRepository, FileCharacterRepository, InMemoryCharacterRepo, RepositoryError, Result,
    SaveOutcome, SaveRejection, load_character, save_character,
};
