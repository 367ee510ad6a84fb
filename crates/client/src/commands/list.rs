//! List save slots.

use anyhow::Result;
use charsheet_runtime::CharacterRepository;
use clap::Parser;
use console::style;

use super::Store;

/// List saved characters in the save directory
#[derive(Parser, Debug)]
pub struct List {}

impl List {
    pub fn execute(self, store: &Store) -> Result<()> {
        let repo = store.config().open_repository()?;
        let slots = repo.list_slots()?;

        if slots.is_empty() {
            println!(
                "{}",
                style(format!(
                    "No saved characters in {}",
                    repo.base_dir().display()
                ))
                .dim()
            );
            return Ok(());
        }

        println!(
            "{} {}",
            style("Save directory:").bold().cyan(),
            repo.base_dir().display()
        );
        for slot in slots {
            println!("  {}", slot);
        }

        Ok(())
    }
}
