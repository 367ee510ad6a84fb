//! Level up a saved character and write it back.

use anyhow::{Context, Result};
use charsheet_core::{Character, CharacterRecord, display_character};
use clap::Parser;

use super::{Store, Target};

/// Level up a saved character
#[derive(Parser, Debug)]
pub struct LevelUp {
    /// Slot name or path of the save file
    #[arg(value_name = "TARGET")]
    target: String,

    /// Number of levels to gain
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    times: u32,
}

impl LevelUp {
    pub fn execute(self, store: &Store) -> Result<()> {
        let target = store.target(&self.target);
        let character = level_up_target(store, &target, self.times)?;
        display_character(&character);
        Ok(())
    }
}

/// Load the character at `target`, gain `times` levels and save it back.
///
/// A partial record is refused before anything is written.
pub(super) fn level_up_target(store: &Store, target: &Target, times: u32) -> Result<Character> {
    let mut character = store
        .load_existing(target)?
        .into_character()
        .with_context(|| format!("Cannot level up the character at {target}"))?;

    let from = character.level();
    for _ in 0..times {
        character.level_up();
    }

    tracing::info!(
        name = character.name(),
        from,
        to = character.level(),
        "Leveled up"
    );

    store.save(target, &CharacterRecord::from(&character))?;
    Ok(character)
}
