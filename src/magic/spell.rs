//! Spells and the nine branches of magic
//!
//! A spell's difficulty class is derived from its power level, never stored.

use serde::{Deserialize, Serialize};

/// The nine magical disciplines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagicBranch {
    Divination,
    Alchemy,
    Elementalism,
    Enchantment,
    Illusion,
    Necromancy,
    Summoning,
    Transmutation,
    Abjuration,
}

impl MagicBranch {
    /// Every branch, for iteration
    pub const ALL: [MagicBranch; 9] = [
        MagicBranch::Divination,
        MagicBranch::Alchemy,
        MagicBranch::Elementalism,
        MagicBranch::Enchantment,
        MagicBranch::Illusion,
        MagicBranch::Necromancy,
        MagicBranch::Summoning,
        MagicBranch::Transmutation,
        MagicBranch::Abjuration,
    ];
}

/// Spell power levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpellLevel {
    Minor = 1,
    Lesser = 2,
    Moderate = 3,
    Greater = 4,
    Master = 5,
}

impl SpellLevel {
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// A magical spell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub branch: MagicBranch,
    pub level: SpellLevel,
    /// Casting time in rounds
    pub casting_time: i32,
    pub exhaustion_cost: i32,
    pub description: String,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        branch: MagicBranch,
        level: SpellLevel,
        casting_time: i32,
        exhaustion_cost: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            branch,
            level,
            casting_time,
            exhaustion_cost,
            description: description.into(),
        }
    }

    /// Minimum casting roll needed: 10 + twice the level
    pub fn difficulty_class(&self) -> i32 {
        10 + self.level.value() * 2
    }

    /// Combat spell factory: damage, casting time, and cost scale with level
    pub fn combat(name: impl Into<String>, branch: MagicBranch, level: SpellLevel) -> Self {
        let damage = level.value() * 3;
        Self::new(
            name,
            branch,
            level,
            level.value(),
            level.value() * 2,
            format!("Deals {damage} damage to target"),
        )
    }

    pub fn fireball() -> Self {
        Self::combat("Fireball", MagicBranch::Elementalism, SpellLevel::Moderate)
    }

    pub fn lightning_bolt() -> Self {
        Self::combat(
            "Lightning Bolt",
            MagicBranch::Elementalism,
            SpellLevel::Greater,
        )
    }

    pub fn magic_missile() -> Self {
        Self::combat("Magic Missile", MagicBranch::Abjuration, SpellLevel::Minor)
    }

    pub fn ice_spear() -> Self {
        Self::combat("Ice Spear", MagicBranch::Elementalism, SpellLevel::Lesser)
    }

    pub fn heal() -> Self {
        Self::new(
            "Heal",
            MagicBranch::Enchantment,
            SpellLevel::Moderate,
            2,
            4,
            "Heals 1d10 hit points worth of wounds",
        )
    }

    pub fn detect_magic() -> Self {
        Self::new(
            "Detect Magic",
            MagicBranch::Divination,
            SpellLevel::Minor,
            1,
            1,
            "Reveals magical auras within 30 feet",
        )
    }

    pub fn shield() -> Self {
        Self::new(
            "Shield",
            MagicBranch::Abjuration,
            SpellLevel::Lesser,
            1,
            2,
            "Grants +2 to defense for 5 rounds",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_class_per_level() {
        let dc = |level| Spell::new("Test", MagicBranch::Illusion, level, 1, 1, "").difficulty_class();
        assert_eq!(dc(SpellLevel::Minor), 12);
        assert_eq!(dc(SpellLevel::Lesser), 14);
        assert_eq!(dc(SpellLevel::Moderate), 16);
        assert_eq!(dc(SpellLevel::Greater), 18);
        assert_eq!(dc(SpellLevel::Master), 20);
    }

    #[test]
    fn test_combat_factory_scales_with_level() {
        let bolt = Spell::combat("Bolt", MagicBranch::Elementalism, SpellLevel::Greater);
        assert_eq!(bolt.casting_time, 4);
        assert_eq!(bolt.exhaustion_cost, 8);
        assert!(bolt.description.contains("12 damage"));
    }

    #[test]
    fn test_all_branches_listed_once() {
        assert_eq!(MagicBranch::ALL.len(), 9);
        for (i, a) in MagicBranch::ALL.iter().enumerate() {
            for b in &MagicBranch::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(Spell::fireball().branch, MagicBranch::Elementalism);
        assert_eq!(Spell::fireball().level, SpellLevel::Moderate);
        assert_eq!(Spell::magic_missile().exhaustion_cost, 2);
        assert_eq!(Spell::heal().exhaustion_cost, 4);
        assert_eq!(Spell::shield().difficulty_class(), 14);
    }

    #[test]
    fn test_level_ordering() {
        assert!(SpellLevel::Master > SpellLevel::Minor);
        assert_eq!(SpellLevel::Master.value(), 5);
    }
}
