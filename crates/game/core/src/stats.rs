//! Stat calculator.
//!
//! Strength, magic, and health are never stored independently: they are a
//! pure function of class and level.
//!
//! Stat = Base + Level × PerLevel
//!
//! | Class   | Strength | Magic  | Health  |
//! |---------|----------|--------|---------|
//! | Warrior | 25 + 5L  | 3 + 1L | 150+20L |
//! | Mage    | 10 + 2L  | 25+20L | 100+15L |
//! | Cleric  | 15 + 5L  | 20 + 1L| 125+18L |
//! | Rogue   | 20 + 5L  | 12 + 1L| 90 +10L |

use crate::class::CharacterClass;

/// The three derived stats of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatLine {
    pub strength: u32,
    pub magic: u32,
    pub health: u32,
}

impl StatLine {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(strength: u32, magic: u32, health: u32) -> Self {
        Self {
            strength,
            magic,
            health,
        }
    }
}

impl From<StatLine> for (u32, u32, u32) {
    fn from(stats: StatLine) -> Self {
        (stats.strength, stats.magic, stats.health)
    }
}

/// Linear growth of a single stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Growth {
    base: u32,
    per_level: u32,
}

impl Growth {
    const fn new(base: u32, per_level: u32) -> Self {
        Self { base, per_level }
    }

    const fn at(self, level: u32) -> u32 {
        self.base.saturating_add(level.saturating_mul(self.per_level))
    }
}

/// Growth table row for one class.
#[derive(Clone, Copy, Debug)]
struct ClassGrowth {
    strength: Growth,
    magic: Growth,
    health: Growth,
}

impl ClassGrowth {
    const fn at(self, level: u32) -> StatLine {
        StatLine::new(
            self.strength.at(level),
            self.magic.at(level),
            self.health.at(level),
        )
    }
}

const WARRIOR: ClassGrowth = ClassGrowth {
    strength: Growth::new(25, 5),
    magic: Growth::new(3, 1),
    health: Growth::new(150, 20),
};

const MAGE: ClassGrowth = ClassGrowth {
    strength: Growth::new(10, 2),
    magic: Growth::new(25, 20),
    health: Growth::new(100, 15),
};

const CLERIC: ClassGrowth = ClassGrowth {
    strength: Growth::new(15, 5),
    magic: Growth::new(20, 1),
    health: Growth::new(125, 18),
};

const ROGUE: ClassGrowth = ClassGrowth {
    strength: Growth::new(20, 5),
    magic: Growth::new(12, 1),
    health: Growth::new(90, 10),
};

fn growth_of(class: &CharacterClass) -> Option<ClassGrowth> {
    match class {
        CharacterClass::Warrior => Some(WARRIOR),
        CharacterClass::Mage => Some(MAGE),
        CharacterClass::Cleric => Some(CLERIC),
        CharacterClass::Rogue => Some(ROGUE),
        CharacterClass::Unrecognized(_) => None,
    }
}

/// Compute the stats of `class` at `level`.
///
/// An unrecognized class yields [`StatLine::ZERO`] and emits a warning; it is
/// not an error.
pub fn calculate_stats(class: &CharacterClass, level: u32) -> StatLine {
    match growth_of(class) {
        Some(growth) => growth.at(level),
        None => {
            tracing::warn!(
                class = %class,
                level,
                "unrecognized character class, pick one of Warrior, Mage, Cleric or Rogue; stats default to zero"
            );
            StatLine::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(class: CharacterClass, level: u32) -> (u32, u32, u32) {
        calculate_stats(&class, level).into()
    }

    #[test]
    fn warrior_table() {
        assert_eq!(stats(CharacterClass::Warrior, 1), (30, 4, 170));
        assert_eq!(stats(CharacterClass::Warrior, 5), (50, 8, 250));
        assert_eq!(stats(CharacterClass::Warrior, 20), (125, 23, 550));
    }

    #[test]
    fn mage_table() {
        assert_eq!(stats(CharacterClass::Mage, 1), (12, 45, 115));
        assert_eq!(stats(CharacterClass::Mage, 5), (20, 125, 175));
        assert_eq!(stats(CharacterClass::Mage, 20), (50, 425, 400));
    }

    #[test]
    fn cleric_table() {
        assert_eq!(stats(CharacterClass::Cleric, 1), (20, 21, 143));
        assert_eq!(stats(CharacterClass::Cleric, 5), (40, 25, 215));
        assert_eq!(stats(CharacterClass::Cleric, 20), (115, 40, 485));
    }

    #[test]
    fn rogue_table() {
        assert_eq!(stats(CharacterClass::Rogue, 1), (25, 13, 100));
        assert_eq!(stats(CharacterClass::Rogue, 5), (45, 17, 140));
        assert_eq!(stats(CharacterClass::Rogue, 20), (120, 32, 290));
    }

    #[test]
    fn unrecognized_class_is_zeroed_at_any_level() {
        for level in [0, 1, 5, 20, 1000] {
            assert_eq!(
                calculate_stats(&CharacterClass::from_name("Bard"), level),
                StatLine::ZERO
            );
        }
        assert_eq!(calculate_stats(&CharacterClass::default(), 1), StatLine::ZERO);
    }

    #[test]
    fn huge_levels_saturate() {
        let line = calculate_stats(&CharacterClass::Warrior, u32::MAX);
        assert_eq!(line, StatLine::new(u32::MAX, u32::MAX, u32::MAX));
    }
}
