//! File-based repository implementations.

mod character;
mod slots;

pub use character::{load_character, save_character};
pub use slots::FileCharacterRepository;
