//! Ranged weapons for combat resolution
//!
//! Unlike melee weapons, ranged weapons carry a flat damage value plus
//! three ascending range thresholds that drive range banding.

use serde::{Deserialize, Serialize};

/// Ranged weapon categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangedWeaponType {
    Bow,
    Crossbow,
    Firearm,
}

/// A ranged weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangedWeapon {
    pub name: String,
    pub weapon_type: RangedWeaponType,
    pub damage: i32,
    pub short_range: i32,
    pub medium_range: i32,
    pub long_range: i32,
}

impl RangedWeapon {
    pub fn new(
        name: impl Into<String>,
        weapon_type: RangedWeaponType,
        damage: i32,
        short_range: i32,
        medium_range: i32,
        long_range: i32,
    ) -> Self {
        Self {
            name: name.into(),
            weapon_type,
            damage,
            short_range,
            medium_range,
            long_range,
        }
    }

    pub fn short_bow() -> Self {
        Self::new("Short Bow", RangedWeaponType::Bow, 4, 30, 60, 150)
    }

    pub fn long_bow() -> Self {
        Self::new("Long Bow", RangedWeaponType::Bow, 6, 50, 100, 250)
    }

    pub fn light_crossbow() -> Self {
        Self::new("Light Crossbow", RangedWeaponType::Crossbow, 5, 40, 80, 200)
    }

    pub fn heavy_crossbow() -> Self {
        Self::new("Heavy Crossbow", RangedWeaponType::Crossbow, 8, 50, 100, 250)
    }
}
