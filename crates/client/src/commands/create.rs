//! Create a new level 1 character and save it.

use std::path::PathBuf;

use anyhow::Result;
use charsheet_core::{Character, CharacterRecord, create_character, display_character};
use clap::Parser;

use super::{Store, Target, default_slot_for};

/// Create a new character
#[derive(Parser, Debug)]
pub struct Create {
    /// Character name
    #[arg(value_name = "NAME")]
    name: String,

    /// Warrior, Mage, Cleric or Rogue (other names get zeroed stats)
    #[arg(value_name = "CLASS")]
    class: Option<String>,

    /// Save slot (defaults to one derived from the character name)
    #[arg(short, long, value_name = "SLOT", conflicts_with = "out")]
    slot: Option<String>,

    /// Write to this file instead of a slot
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,
}

impl Create {
    pub fn execute(self, store: &Store) -> Result<()> {
        let target = match (self.out, self.slot) {
            (Some(path), _) => Some(Target::Path(path)),
            (None, Some(slot)) => Some(Target::Slot(slot)),
            (None, None) => None,
        };

        let (character, _) = create_in(store, &self.name, self.class.as_deref(), target)?;
        display_character(&character);
        Ok(())
    }
}

/// Build a character and save it to `target`, or to the slot derived from
/// its name when no target is given.
pub(super) fn create_in(
    store: &Store,
    name: &str,
    class: Option<&str>,
    target: Option<Target>,
) -> Result<(Character, Target)> {
    let character = create_character(Some(name), class);

    let target = target.unwrap_or_else(|| {
        Target::Slot(default_slot_for(
            character.name(),
            &store.config().save_extension,
        ))
    });

    tracing::info!(
        name = character.name(),
        class = %character.class(),
        %target,
        "Created character"
    );

    store.save(&target, &CharacterRecord::from(&character))?;
    Ok((character, target))
}
