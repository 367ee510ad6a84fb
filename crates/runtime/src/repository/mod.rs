//! Repository layer for character save data.
//!
//! - [`codec`] renders and parses the `<Label>: <value>` text format
//! - [`file`] saves and loads single files, plus a slot directory
//! - [`memory`] keeps slots in memory for tests and dry runs

pub mod codec;
mod error;
pub mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileCharacterRepository, load_character, save_character};
pub use memory::InMemoryCharacterRepo;
pub use traits::CharacterRepository;
pub use types::{SaveOutcome, SaveRejection, validate_slot};
