//! The character record and the operations that create and grow it.

use crate::class::CharacterClass;
use crate::stats::{StatLine, calculate_stats};

/// A single player character.
///
/// Stats are only written by the factory and by [`Character::level_up`], both
/// of which derive them from class and level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Character {
    name: String,
    class: CharacterClass,
    level: u32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    stats: StatLine,
    gold: u32,
}

impl Character {
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_GOLD: u32 = 100;

    /// Create a level 1 character with 100 gold.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let level = Self::STARTING_LEVEL;
        let stats = calculate_stats(&class, level);
        Self {
            name: name.into(),
            class,
            level,
            stats,
            gold: Self::STARTING_GOLD,
        }
    }

    /// Reassemble a character from persisted values without recomputing stats.
    pub(crate) fn from_parts(
        name: String,
        class: CharacterClass,
        level: u32,
        stats: StatLine,
        gold: u32,
    ) -> Self {
        Self {
            name,
            class,
            level,
            stats,
            gold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> StatLine {
        self.stats
    }

    pub fn strength(&self) -> u32 {
        self.stats.strength
    }

    pub fn magic(&self) -> u32 {
        self.stats.magic
    }

    pub fn health(&self) -> u32 {
        self.stats.health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Whether stored stats match the class formula at the current level.
    pub fn has_consistent_stats(&self) -> bool {
        self.stats == calculate_stats(&self.class, self.level)
    }

    /// Advance one level and recompute stats. Name, class and gold are kept.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.stats = calculate_stats(&self.class, self.level);

        tracing::debug!(
            name = %self.name,
            level = self.level,
            strength = self.stats.strength,
            magic = self.stats.magic,
            health = self.stats.health,
            "character leveled up"
        );
    }
}

/// Build a new character, normalizing absent inputs.
///
/// A missing name becomes the empty string and a missing class becomes
/// "Adventurer", which has zeroed stats.
pub fn create_character(name: Option<&str>, class: Option<&str>) -> Character {
    let class = class
        .map(CharacterClass::from_name)
        .unwrap_or_default();
    Character::new(name.unwrap_or_default(), class)
}

/// Free-function form of [`Character::level_up`].
pub fn level_up(character: &mut Character) {
    character.level_up();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_mage_scenario() {
        let mut hero = create_character(Some("TestHero"), Some("Mage"));

        assert_eq!(hero.name(), "TestHero");
        assert_eq!(hero.class(), &CharacterClass::Mage);
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.stats(), StatLine::new(12, 45, 115));
        assert_eq!(hero.gold(), 100);

        level_up(&mut hero);

        assert_eq!(hero.level(), 2);
        assert_eq!(hero.strength(), 14);
        assert_eq!(hero.magic(), 65);
        assert_eq!(hero.health(), 130);
        assert_eq!(hero.gold(), 100);
    }

    #[test]
    fn absent_inputs_are_normalized() {
        let nobody = create_character(None, None);

        assert_eq!(nobody.name(), "");
        assert_eq!(nobody.class().name(), "Adventurer");
        assert_eq!(nobody.stats(), StatLine::ZERO);
        assert_eq!(nobody.level(), 1);
        assert_eq!(nobody.gold(), 100);
    }

    #[test]
    fn level_up_follows_formula_for_every_class() {
        let classes = CharacterClass::RECOGNIZED
            .into_iter()
            .chain([CharacterClass::from_name("Bard")]);

        for class in classes {
            let mut character = Character::new("Probe", class.clone());
            for _ in 0..10 {
                let before = character.clone();
                character.level_up();

                assert_eq!(character.level(), before.level() + 1);
                assert_eq!(
                    character.stats(),
                    calculate_stats(&class, character.level())
                );
                assert_eq!(character.name(), before.name());
                assert_eq!(character.class(), before.class());
                assert_eq!(character.gold(), before.gold());
                assert!(character.has_consistent_stats());
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_flat_stats() {
        let hero = create_character(Some("Aria"), Some("Cleric"));
        let json = serde_json::to_value(&hero).unwrap();

        assert_eq!(json["class"], "Cleric");
        assert_eq!(json["health"], 143);
        assert_eq!(json["gold"], 100);

        let wanderer = create_character(Some("Bo"), None);
        let json = serde_json::to_value(&wanderer).unwrap();
        assert_eq!(json["class"], "Adventurer");
        assert_eq!(json["strength"], 0);
    }
}
