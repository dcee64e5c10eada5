//! Armor for combat resolution
//!
//! Protection subtracts from incoming damage; the movement penalty applies,
//! as a negative, to every roll the wearer makes.

use serde::{Deserialize, Serialize};

/// Armor weight categories, lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorType {
    HeavyCloth = 1,
    Leather = 2,
    Chain = 3,
    Plate = 4,
    FullPlate = 5,
}

/// A suit of armor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub armor_type: ArmorType,
    pub protection: i32,
    pub movement_penalty: i32,
}

impl Armor {
    pub fn new(
        name: impl Into<String>,
        armor_type: ArmorType,
        protection: i32,
        movement_penalty: i32,
    ) -> Self {
        Self {
            name: name.into(),
            armor_type,
            protection,
            movement_penalty,
        }
    }

    /// No armor at all
    pub fn none() -> Self {
        Self::new("None", ArmorType::HeavyCloth, 0, 0)
    }

    pub fn heavy_cloth() -> Self {
        Self::new("Heavy Cloth", ArmorType::HeavyCloth, 1, 0)
    }

    pub fn leather() -> Self {
        Self::new("Leather", ArmorType::Leather, 2, 0)
    }

    pub fn chain() -> Self {
        Self::new("Chain Mail", ArmorType::Chain, 3, -1)
    }

    pub fn plate() -> Self {
        Self::new("Plate Armor", ArmorType::Plate, 4, -2)
    }

    pub fn full_plate() -> Self {
        Self::new("Full Plate", ArmorType::FullPlate, 5, -3)
    }
}

impl Default for Armor {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmored() {
        let naked = Armor::none();
        assert_eq!(naked.protection, 0);
        assert_eq!(naked.movement_penalty, 0);
    }

    #[test]
    fn test_protection_rises_with_weight() {
        assert_eq!(Armor::heavy_cloth().protection, 1);
        assert_eq!(Armor::leather().protection, 2);
        assert_eq!(Armor::chain().protection, 3);
        assert_eq!(Armor::plate().protection, 4);
        assert_eq!(Armor::full_plate().protection, 5);
    }

    #[test]
    fn test_heavy_armor_slows() {
        assert_eq!(Armor::leather().movement_penalty, 0);
        assert_eq!(Armor::chain().movement_penalty, -1);
        assert_eq!(Armor::plate().movement_penalty, -2);
        assert_eq!(Armor::full_plate().movement_penalty, -3);
    }

    #[test]
    fn test_default_is_unarmored() {
        assert_eq!(Armor::default(), Armor::none());
    }
}
