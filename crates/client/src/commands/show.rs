//! Print a saved character.

use anyhow::{Context, Result};
use charsheet_core::{CharacterRecord, CharacterSheet};
use clap::Parser;

use super::{Store, partial_sheet};

/// Show a saved character
#[derive(Parser, Debug)]
pub struct Show {
    /// Slot name or path of the save file
    #[arg(value_name = "TARGET")]
    target: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "sheet")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(super) enum OutputFormat {
    /// Character sheet
    Sheet,
    /// JSON object
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Show {
    pub fn execute(self, store: &Store) -> Result<()> {
        let record = store.load_existing(&store.target(&self.target))?;
        print!("{}", render(record, self.format)?);
        Ok(())
    }
}

/// Render a loaded record in the requested format.
pub(super) fn render(record: CharacterRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sheet => Ok(sheet(record)),
        OutputFormat::Json => json(record),
        OutputFormat::Debug => Ok(format!("{:#?}\n", record)),
    }
}

fn sheet(record: CharacterRecord) -> String {
    match record.clone().into_character() {
        Ok(character) => CharacterSheet(&character).to_string(),
        Err(_) => partial_sheet(&record),
    }
}

fn json(record: CharacterRecord) -> Result<String> {
    let json = if record.is_complete() {
        let character = record
            .into_character()
            .context("Failed to assemble character")?;
        serde_json::to_string_pretty(&character)
    } else {
        serde_json::to_string_pretty(&record)
    }
    .context("Failed to serialize character to JSON")?;

    Ok(json + "\n")
}
