//! Field-level view of a character used by persistence.
//!
//! A [`CharacterRecord`] holds whatever subset of the seven fields could be
//! recovered from a save file. It becomes a [`Character`] only once every
//! field is present.

use core::fmt;

use crate::character::Character;
use crate::class::CharacterClass;
use crate::error::RecordError;
use crate::stats::StatLine;

/// The seven persisted fields, in canonical file order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Class,
    Level,
    Strength,
    Magic,
    Health,
    Gold,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Class,
        Field::Level,
        Field::Strength,
        Field::Magic,
        Field::Health,
        Field::Gold,
    ];

    /// Canonical key (`name`, `class`, ...).
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Canonical label written to save files.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Character Name",
            Self::Class => "Class",
            Self::Level => "Level",
            Self::Strength => "Strength",
            Self::Magic => "Magic",
            Self::Health => "Health",
            Self::Gold => "Gold",
        }
    }

    /// Match a label case-insensitively against the canonical labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "character name" => Some(Self::Name),
            "class" => Some(Self::Class),
            "level" => Some(Self::Level),
            "strength" => Some(Self::Strength),
            "magic" => Some(Self::Magic),
            "health" => Some(Self::Health),
            "gold" => Some(Self::Gold),
            _ => None,
        }
    }

    /// Whether the field holds an integer.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Name | Self::Class)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Possibly partial set of character fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterRecord {
    pub name: Option<String>,
    pub class: Option<String>,
    pub level: Option<u32>,
    pub strength: Option<u32>,
    pub magic: Option<u32>,
    pub health: Option<u32>,
    pub gold: Option<u32>,
}

impl CharacterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field was recovered.
    pub fn is_empty(&self) -> bool {
        self.present_fields().next().is_none()
    }

    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.is_some(),
            Field::Class => self.class.is_some(),
            numeric => self.number(numeric).is_some(),
        }
    }

    /// Fields present, in canonical order.
    pub fn present_fields(&self) -> impl Iterator<Item = Field> + '_ {
        <Field as strum::IntoEnumIterator>::iter().filter(|field| self.has(*field))
    }

    /// Fields absent, in canonical order.
    pub fn missing_fields(&self) -> Vec<Field> {
        <Field as strum::IntoEnumIterator>::iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Value of an integer field. Returns `None` for text fields.
    pub fn number(&self, field: Field) -> Option<u32> {
        match field {
            Field::Level => self.level,
            Field::Strength => self.strength,
            Field::Magic => self.magic,
            Field::Health => self.health,
            Field::Gold => self.gold,
            Field::Name | Field::Class => None,
        }
    }

    /// Field value rendered as it appears after the label in a save file.
    pub fn value_text(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.clone(),
            Field::Class => self.class.clone(),
            numeric => self.number(numeric).map(|value| value.to_string()),
        }
    }

    /// Store a text value. Integer fields are ignored; use [`Self::set_number`].
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Name => self.name = Some(value.into()),
            Field::Class => self.class = Some(value.into()),
            _ => {}
        }
    }

    /// Store an integer value. Text fields are ignored; use [`Self::set_text`].
    pub fn set_number(&mut self, field: Field, value: u32) {
        let slot = match field {
            Field::Level => &mut self.level,
            Field::Strength => &mut self.strength,
            Field::Magic => &mut self.magic,
            Field::Health => &mut self.health,
            Field::Gold => &mut self.gold,
            Field::Name | Field::Class => return,
        };
        *slot = Some(value);
    }

    /// Drop a field from the record.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Class => self.class = None,
            Field::Level => self.level = None,
            Field::Strength => self.strength = None,
            Field::Magic => self.magic = None,
            Field::Health => self.health = None,
            Field::Gold => self.gold = None,
        }
    }

    /// First missing field in canonical order, if any.
    pub fn first_missing(&self) -> Option<Field> {
        <Field as strum::IntoEnumIterator>::iter().find(|field| !self.has(*field))
    }

    /// Convert into a complete character.
    ///
    /// Stored stats are kept as-is. A mismatch with the class formula is
    /// logged but not corrected; the next level-up recomputes them.
    pub fn into_character(self) -> Result<Character, RecordError> {
        let missing = RecordError::MissingField;
        let name = self.name.ok_or(missing(Field::Name))?;
        let class = self.class.ok_or(missing(Field::Class))?;
        let level = self.level.ok_or(missing(Field::Level))?;
        let strength = self.strength.ok_or(missing(Field::Strength))?;
        let magic = self.magic.ok_or(missing(Field::Magic))?;
        let health = self.health.ok_or(missing(Field::Health))?;
        let gold = self.gold.ok_or(missing(Field::Gold))?;

        let character = Character::from_parts(
            name,
            CharacterClass::from_name(&class),
            level,
            StatLine::new(strength, magic, health),
            gold,
        );

        if !character.has_consistent_stats() {
            tracing::warn!(
                name = character.name(),
                class = %character.class(),
                level,
                "stored stats differ from the class formula"
            );
        }

        Ok(character)
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = RecordError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        record.into_character()
    }
}

impl From<&Character> for CharacterRecord {
    fn from(character: &Character) -> Self {
        let stats = character.stats();
        Self {
            name: Some(character.name().to_owned()),
            class: Some(character.class().name().to_owned()),
            level: Some(character.level()),
            strength: Some(stats.strength),
            magic: Some(stats.magic),
            health: Some(stats.health),
            gold: Some(character.gold()),
        }
    }
}

impl From<Character> for CharacterRecord {
    fn from(character: Character) -> Self {
        Self::from(&character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::create_character;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_in_canonical_order() {
        let labels: Vec<_> = Field::iter().map(Field::label).collect();
        assert_eq!(
            labels,
            [
                "Character Name",
                "Class",
                "Level",
                "Strength",
                "Magic",
                "Health",
                "Gold"
            ]
        );
    }

    #[test]
    fn keys_are_snake_case() {
        assert_eq!(Field::Name.key(), "name");
        assert_eq!(Field::Gold.to_string(), "gold");
    }

    #[test]
    fn label_matching_ignores_case() {
        assert_eq!(Field::from_label("character name"), Some(Field::Name));
        assert_eq!(Field::from_label("CHARACTER NAME"), Some(Field::Name));
        assert_eq!(Field::from_label("hEaLtH"), Some(Field::Health));
        assert_eq!(Field::from_label("name"), None);
        assert_eq!(Field::from_label("Mana"), None);
    }

    #[test]
    fn record_from_character_is_complete() {
        let hero = create_character(Some("Aria"), Some("Mage"));
        let record = CharacterRecord::from(&hero);

        assert!(record.is_complete());
        assert_eq!(record.value_text(Field::Class).as_deref(), Some("Mage"));
        assert_eq!(record.value_text(Field::Magic).as_deref(), Some("45"));
        assert_eq!(record.into_character().unwrap(), hero);
    }

    #[test]
    fn partial_record_reports_first_missing_field() {
        let mut record = CharacterRecord::from(create_character(Some("Aria"), Some("Mage")));
        record.clear(Field::Level);
        record.clear(Field::Gold);

        assert_eq!(record.missing_fields(), vec![Field::Level, Field::Gold]);
        assert_eq!(
            record.into_character(),
            Err(RecordError::MissingField(Field::Level))
        );
    }

    #[test]
    fn setters_ignore_mismatched_kinds() {
        let mut record = CharacterRecord::new();
        assert!(record.is_empty());

        record.set_number(Field::Name, 7);
        record.set_text(Field::Level, "7");
        assert!(record.is_empty());

        record.set_number(Field::Level, 7);
        record.set_text(Field::Name, "Kael");
        assert_eq!(
            record.present_fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Level]
        );
    }

    #[test]
    fn stored_stats_survive_conversion() {
        let mut record = CharacterRecord::from(create_character(Some("Kael"), Some("Rogue")));
        record.set_number(Field::Strength, 999);

        let character = record.into_character().unwrap();
        assert_eq!(character.stats().strength, 999);
        assert!(!character.has_consistent_stats());
    }
}
