//! Line-oriented text format for character records.
//!
//! # File Format
//!
//! ```text
//! Character Name: Aria
//! Class: Mage
//! Level: 1
//! Strength: 12
//! Magic: 45
//! Health: 115
//! Gold: 100
//! ```
//!
//! The writer always emits these seven labels in this order. The reader
//! accepts any order and label case, skips unknown labels, and skips integer
//! lines whose value is not a plain run of decimal digits.

use charsheet_core::{CharacterRecord, Field};

use crate::repository::SaveRejection;

/// Render a complete record as seven `<Label>: <value>` lines.
///
/// Fails with the first missing field in canonical order, or with the first
/// text value holding a line break, which would not survive a reload.
pub fn encode(record: &CharacterRecord) -> Result<String, SaveRejection> {
    if let Some(field) = record.first_missing() {
        return Err(SaveRejection::MissingField(field));
    }

    let mut out = String::new();
    for field in Field::ALL {
        let value = record
            .value_text(field)
            .ok_or(SaveRejection::MissingField(field))?;
        if value.contains(['\n', '\r']) {
            return Err(SaveRejection::InvalidValue(field));
        }
        out.push_str(field.label());
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }
    Ok(out)
}

/// Parse save file text. Returns `None` when no field could be recovered.
pub fn decode(text: &str) -> Option<CharacterRecord> {
    let mut parser = RecordParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Incremental parser fed one line at a time.
#[derive(Debug, Default)]
pub struct RecordParser {
    record: CharacterRecord,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single line. Unusable lines are skipped.
    pub fn feed_line(&mut self, line: &str) {
        let Some((label, value)) = line.trim().split_once(':') else {
            return;
        };
        let (label, value) = (label.trim(), value.trim());

        let Some(field) = Field::from_label(label) else {
            tracing::trace!(label, "skipping unrecognized label");
            return;
        };

        if !field.is_numeric() {
            self.record.set_text(field, value);
            return;
        }

        match parse_digits(value) {
            Some(number) => self.record.set_number(field, number),
            None => {
                tracing::debug!(field = %field, value, "skipping non-numeric value");
            }
        }
    }

    pub fn finish(self) -> Option<CharacterRecord> {
        if self.record.is_empty() {
            None
        } else {
            Some(self.record)
        }
    }
}

/// Accept only non-empty runs of ASCII digits that fit in a `u32`.
fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_core::create_character;

    const ARIA: &str = "Character Name: Aria\n\
                        Class: Mage\n\
                        Level: 1\n\
                        Strength: 12\n\
                        Magic: 45\n\
                        Health: 115\n\
                        Gold: 100\n";

    #[test]
    fn encodes_seven_canonical_lines() {
        let record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));
        assert_eq!(encode(&record).unwrap(), ARIA);
    }

    #[test]
    fn encode_rejects_missing_gold() {
        let mut record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));
        record.clear(Field::Gold);

        assert_eq!(
            encode(&record),
            Err(SaveRejection::MissingField(Field::Gold))
        );
    }

    #[test]
    fn encode_rejects_line_breaks_in_text() {
        let record = CharacterRecord::from(create_character(Some("Aria\nGold: 5"), Some("Mage")));
        assert_eq!(encode(&record), Err(SaveRejection::InvalidValue(Field::Name)));

        let record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage\r")));
        assert_eq!(encode(&record), Err(SaveRejection::InvalidValue(Field::Class)));
    }

    #[test]
    fn missing_field_reported_before_line_breaks() {
        let mut record = CharacterRecord::from(create_character(Some("A\nB"), Some("Mage")));
        record.clear(Field::Gold);

        assert_eq!(encode(&record), Err(SaveRejection::MissingField(Field::Gold)));
    }

    #[test]
    fn decodes_canonical_text() {
        let record = decode(ARIA).unwrap();
        let character = record.into_character().unwrap();

        assert_eq!(character, create_character(Some("Aria"), Some("Mage")));
    }

    #[test]
    fn tolerates_order_case_and_unknown_lines() {
        let text = "gold: 250\n\
                    # comment line without a label\n\
                    Favorite Color: teal\n\
                    CLASS:   Rogue  \n\
                    character NAME:Kael: the Quick\n";
        let record = decode(text).unwrap();

        assert_eq!(record.gold, Some(250));
        assert_eq!(record.class.as_deref(), Some("Rogue"));
        assert_eq!(record.name.as_deref(), Some("Kael: the Quick"));
        assert_eq!(record.level, None);
    }

    #[test]
    fn skips_malformed_integers() {
        let text = "Level: abc\n\
                    Strength: -5\n\
                    Magic: +7\n\
                    Health: 12 hp\n\
                    Gold: 99999999999999999999\n\
                    Character Name: Aria\n";
        let record = decode(text).unwrap();

        assert_eq!(record.name.as_deref(), Some("Aria"));
        assert_eq!(record.missing_fields().len(), 6);
        assert!(!record.has(Field::Level));
    }

    #[test]
    fn empty_name_value_is_kept() {
        let record = decode("Character Name:\n").unwrap();
        assert_eq!(record.name.as_deref(), Some(""));
    }

    #[test]
    fn nothing_recovered_is_none() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("hello\nMana: 10\nLevel: x\n"), None);
    }

    #[test]
    fn later_lines_win() {
        let record = decode("Level: 3\nLevel: 4\n").unwrap();
        assert_eq!(record.level, Some(4));
    }
}
