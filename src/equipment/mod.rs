pub mod armor;
pub mod ranged;
pub mod weapons;

pub use armor::{Armor, ArmorType};
pub use ranged::{RangedWeapon, RangedWeaponType};
pub use weapons::{Weapon, WeaponImpact};
