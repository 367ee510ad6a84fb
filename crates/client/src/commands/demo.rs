//! Walk through create, level up, save and load with a sample character.

use std::path::PathBuf;

use anyhow::{Context, Result};
use charsheet_core::{CharacterRecord, create_character, display_character};
use clap::Parser;
use console::style;

use super::{Store, Target};

/// Run the sample TestHero walkthrough
#[derive(Parser, Debug)]
pub struct Demo {
    /// File the sample character is saved to
    #[arg(short, long, value_name = "PATH", default_value = "my_character.txt")]
    out: PathBuf,
}

impl Demo {
    pub fn execute(self, store: &Store) -> Result<()> {
        let target = Target::Path(self.out);

        let mut hero = create_character(Some("TestHero"), Some("Mage"));
        display_character(&hero);

        hero.level_up();
        println!(
            "{} {} reached level {}",
            style("▲").green().bold(),
            hero.name(),
            hero.level()
        );

        store.save(&target, &CharacterRecord::from(&hero))?;

        let loaded = store
            .load_existing(&target)?
            .into_character()
            .context("Saved file did not contain a complete character")?;

        println!("{}", style("Reloaded from disk:").bold().cyan());
        display_character(&loaded);

        if loaded != hero {
            anyhow::bail!("Reloaded character differs from the one saved");
        }
        Ok(())
    }
}
