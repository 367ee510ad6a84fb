//! `charsheet` subcommands.

mod create;
mod demo;
mod level_up;
mod list;
mod show;

pub use create::Create;
pub use demo::Demo;
pub use level_up::LevelUp;
pub use list::List;
pub use show::Show;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use charsheet_core::{CharacterRecord, Field, SHEET_BANNER};
use charsheet_runtime::{
    CharacterRepository, RuntimeConfig, SaveOutcome, load_character, save_character,
};
use console::style;

/// Where a character lives: a save slot or an explicit file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Slot(String),
    Path(PathBuf),
}

impl Target {
    /// Anything with a path separator or ending in `.{extension}` is a path;
    /// everything else names a slot, dots included ("Dr. Who").
    pub fn parse(raw: &str, extension: &str) -> Self {
        let path = Path::new(raw);
        let has_save_extension = path
            .extension()
            .is_some_and(|ext| ext == OsStr::new(extension));

        if raw.contains(['/', '\\']) || has_save_extension {
            Self::Path(path.to_path_buf())
        } else {
            Self::Slot(raw.to_owned())
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(slot) => write!(f, "slot '{slot}'"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Slot used for characters whose name yields no usable slot.
pub const FALLBACK_SLOT: &str = "character";

/// Slot a new character is saved to when none is given.
///
/// The result always parses back to the same [`Target::Slot`], so the name
/// printed after `create` can be passed straight to `show` or `level-up`.
pub fn default_slot_for(name: &str, extension: &str) -> String {
    let cleaned = name.replace(['/', '\\'], "_");
    let suffix = format!(".{extension}");

    let mut slot = cleaned.as_str();
    loop {
        let trimmed = slot
            .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
            .trim_end();
        match trimmed.strip_suffix(suffix.as_str()) {
            Some(stem) => slot = stem,
            None => {
                slot = trimmed;
                break;
            }
        }
    }

    if slot.is_empty() {
        FALLBACK_SLOT.to_owned()
    } else {
        slot.to_owned()
    }
}

/// Loads and saves targets using the configured slot directory.
pub struct Store {
    config: RuntimeConfig,
}

impl Store {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Resolve a command-line target against the configured save extension.
    pub fn target(&self, raw: &str) -> Target {
        Target::parse(raw, &self.config.save_extension)
    }

    pub fn load(&self, target: &Target) -> Result<Option<CharacterRecord>> {
        let record = match target {
            Target::Path(path) => load_character(path)?,
            Target::Slot(slot) => self.config.open_repository()?.load(slot)?,
        };
        Ok(record)
    }

    /// Load a target, failing when nothing is there.
    pub fn load_existing(&self, target: &Target) -> Result<CharacterRecord> {
        match self.load(target)? {
            Some(record) => Ok(record),
            None => bail!("No character found at {target}"),
        }
    }

    /// Save a record, turning a rejected save into an error.
    pub fn save(&self, target: &Target, record: &CharacterRecord) -> Result<()> {
        let outcome = match target {
            Target::Path(path) => save_character(record, path)?,
            Target::Slot(slot) => self.config.open_repository()?.save(slot, record)?,
        };

        match outcome {
            SaveOutcome::Saved { .. } => {
                println!("{} Saved to {}", style("✓").green().bold(), target);
                Ok(())
            }
            SaveOutcome::Rejected(reason) => bail!("Could not save to {target}: {reason}"),
        }
    }
}

/// Sheet of whatever fields a record has, flagging the missing ones.
pub fn partial_sheet(record: &CharacterRecord) -> String {
    let mut sheet = format!("\n{SHEET_BANNER}\n");
    for field in Field::ALL {
        if let Some(value) = record.value_text(field) {
            sheet.push_str(&format!("{}: {}\n\n", field.label(), value));
        }
    }

    let missing = record.missing_fields();
    if !missing.is_empty() {
        let labels: Vec<_> = missing.iter().map(|field| field.label()).collect();
        sheet.push_str(&format!(
            "{} {}\n",
            style("Missing fields:").bold().yellow(),
            labels.join(", ")
        ));
    }
    sheet
}
