//! Special combat maneuvers
//!
//! A maneuver trades attack, defense, and damage against each other for
//! one exchange. Plain attacks use `Normal`.

use serde::{Deserialize, Serialize};

/// Maneuver chosen for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ManeuverType {
    #[default]
    Normal,
    Charge,
    AllOutAttack,
    DefensivePosition,
}

/// Roll and damage adjustments granted by a maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManeuverModifiers {
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub damage_bonus: i32,
}

impl ManeuverType {
    pub fn modifiers(self) -> ManeuverModifiers {
        match self {
            ManeuverType::Normal => ManeuverModifiers {
                attack_bonus: 0,
                defense_bonus: 0,
                damage_bonus: 0,
            },
            ManeuverType::Charge => ManeuverModifiers {
                attack_bonus: 2,
                defense_bonus: -2,
                damage_bonus: 2,
            },
            ManeuverType::AllOutAttack => ManeuverModifiers {
                attack_bonus: 4,
                defense_bonus: -4,
                damage_bonus: 0,
            },
            ManeuverType::DefensivePosition => ManeuverModifiers {
                attack_bonus: -2,
                defense_bonus: 4,
                damage_bonus: 0,
            },
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ManeuverType::Normal => "Normal attack",
            ManeuverType::Charge => "Charge: +2 attack, -2 defense, +2 damage",
            ManeuverType::AllOutAttack => "All-Out Attack: +4 attack, -4 defense",
            ManeuverType::DefensivePosition => "Defensive Position: -2 attack, +4 defense",
        }
    }
}
