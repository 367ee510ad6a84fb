//! Character classes.
//!
//! The four playable classes form a closed set. Any other class name (including
//! the factory default "Adventurer") is kept verbatim in
//! [`CharacterClass::Unrecognized`] so it survives a save/load cycle.

use core::fmt;

/// Class of a character, parsed by exact (case-sensitive) name.
///
/// ```
/// use charsheet_core::CharacterClass;
///
/// assert_eq!(CharacterClass::from_name("Mage"), CharacterClass::Mage);
/// assert_eq!(
///     CharacterClass::from_name("mage"),
///     CharacterClass::Unrecognized("mage".into())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub enum CharacterClass {
    /// Heavy melee fighter
    Warrior,
    /// Spellcaster
    Mage,
    /// Healer with moderate strength
    Cleric,
    /// Agile fighter
    Rogue,
    /// Any name outside the playable set
    #[strum(default)]
    Unrecognized(String),
}

impl CharacterClass {
    /// Label used by the factory when no class is supplied.
    pub const DEFAULT_NAME: &'static str = "Adventurer";

    /// Playable classes in table order.
    pub const RECOGNIZED: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Cleric,
        CharacterClass::Rogue,
    ];

    /// Parse a class name. Never fails; unknown names become `Unrecognized`.
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| Self::Unrecognized(name.to_owned()))
    }

    /// The class name as written to save files.
    pub fn name(&self) -> &str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Cleric => "Cleric",
            Self::Rogue => "Rogue",
            Self::Unrecognized(name) => name,
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for CharacterClass {
    fn default() -> Self {
        Self::Unrecognized(Self::DEFAULT_NAME.to_owned())
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Unrecognized(name) => name,
            other => other.name().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_playable_classes() {
        for class in CharacterClass::RECOGNIZED {
            assert_eq!(CharacterClass::from_name(class.name()), class);
            assert!(class.is_recognized());
        }
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let bard = CharacterClass::from_name("Bard");
        assert_eq!(bard, CharacterClass::Unrecognized("Bard".into()));
        assert_eq!(bard.to_string(), "Bard");
        assert!(!bard.is_recognized());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!CharacterClass::from_name("WARRIOR").is_recognized());
        assert!(!CharacterClass::from_name(" Rogue").is_recognized());
    }

    #[test]
    fn default_is_adventurer() {
        let class = CharacterClass::default();
        assert_eq!(class.name(), "Adventurer");
        assert!(!class.is_recognized());
    }
}
