//! Human-readable character sheet.

use core::fmt;

use strum::IntoEnumIterator;

use crate::character::Character;
use crate::record::{CharacterRecord, Field};

/// Banner printed above the fields.
pub const SHEET_BANNER: &str = "=== CHARACTER SHEET ===";

/// `Display` adapter rendering a character sheet.
///
/// Each field is printed with its canonical label and followed by a blank line.
pub struct CharacterSheet<'a>(pub &'a Character);

impl fmt::Display for CharacterSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = CharacterRecord::from(self.0);

        writeln!(f)?;
        writeln!(f, "{SHEET_BANNER}")?;
        for field in Field::iter() {
            let value = record.value_text(field).unwrap_or_default();
            writeln!(f, "{}: {}", field.label(), value)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Print the character sheet to stdout.
pub fn display_character(character: &Character) {
    print!("{}", CharacterSheet(character));
}
