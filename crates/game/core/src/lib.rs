//! Character rules shared by the persistence runtime and the CLI.
//!
//! `charsheet-core` defines the character record, its class-driven stat
//! formula, and the partial [`CharacterRecord`] view used by save files. All
//! functions here are pure apart from log events and [`display_character`].
pub mod character;
pub mod class;
pub mod error;
pub mod record;
pub mod sheet;
pub mod stats;

pub use character::{Character, create_character, level_up};
pub use class::CharacterClass;
pub use error::RecordError;
pub use record::{CharacterRecord, Field};
pub use sheet::{CharacterSheet, SHEET_BANNER, display_character};
pub use stats::{StatLine, calculate_stats};
