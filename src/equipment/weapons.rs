//! Melee weapons for combat resolution
//!
//! A weapon is an impact class; base damage is derived from it, never stored.

use serde::{Deserialize, Serialize};

/// Weapon impact classes, ordered by heft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponImpact {
    Small = 1,
    Medium = 2,
    Large = 3,
    Huge = 4,
}

impl WeaponImpact {
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// A melee weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub impact: WeaponImpact,
}

impl Weapon {
    pub fn new(name: impl Into<String>, impact: WeaponImpact) -> Self {
        Self {
            name: name.into(),
            impact,
        }
    }

    /// Base damage: impact class doubled plus one
    pub fn damage(&self) -> i32 {
        self.impact.value() * 2 + 1
    }

    /// Common weapon: dagger (Small impact)
    pub fn dagger() -> Self {
        Self::new("Dagger", WeaponImpact::Small)
    }

    /// Common weapon: long sword (Medium impact)
    pub fn long_sword() -> Self {
        Self::new("Long Sword", WeaponImpact::Medium)
    }

    /// Common weapon: two-handed sword (Large impact)
    pub fn two_handed_sword() -> Self {
        Self::new("Two-Handed Sword", WeaponImpact::Large)
    }

    /// Common weapon: great axe (Huge impact)
    pub fn great_axe() -> Self {
        Self::new("Great Axe", WeaponImpact::Huge)
    }
}
