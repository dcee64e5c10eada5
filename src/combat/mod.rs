pub mod hit_location;
pub mod maneuvers;
pub mod melee;
pub mod ranged;
pub mod result;

pub use maneuvers::{ManeuverModifiers, ManeuverType};
pub use melee::{combat_round, combat_round_with_maneuvers, DefenseAction};
pub use ranged::{determine_range, range_modifier, ranged_attack, RangeCategory, RangedCombatResult};
pub use result::CombatResult;
