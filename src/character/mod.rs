pub mod attributes;
pub mod character;
pub mod exhaustion;
pub mod wounds;

pub use attributes::Attributes;
pub use character::{Character, RangedLoadout};
pub use wounds::{WoundLevel, Wounds};
