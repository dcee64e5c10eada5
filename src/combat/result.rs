//! Outcome record for one melee exchange
//!
//! Records are immutable snapshots; a display layer may render them but
//! never feeds anything back into the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::wounds::WoundLevel;

/// Result of a single melee combat round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub attacker: String,
    pub defender: String,
    pub attack_roll: i32,
    pub defense_roll: i32,
    pub hit: bool,
    pub damage: i32,
    /// Wound inflicted, absent on a miss or a fully-absorbed hit
    pub wound_level: Option<WoundLevel>,
    pub defender_died: bool,
}

impl fmt::Display for CombatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.hit {
            return write!(
                f,
                "{} attacks {}: MISS (Attack:{} vs Defense:{})",
                self.attacker, self.defender, self.attack_roll, self.defense_roll
            );
        }

        write!(
            f,
            "{} attacks {}: HIT for {} damage (Attack:{} vs Defense:{})",
            self.attacker, self.defender, self.damage, self.attack_roll, self.defense_roll
        )?;
        if let Some(level) = self.wound_level {
            write!(f, " - {level} wound")?;
        }
        if self.defender_died {
            write!(f, " - DEFENDER DIED!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_rendering() {
        let result = CombatResult {
            attacker: "Hero".into(),
            defender: "Goblin".into(),
            attack_roll: 8,
            defense_roll: 11,
            hit: false,
            damage: 0,
            wound_level: None,
            defender_died: false,
        };
        assert_eq!(
            result.to_string(),
            "Hero attacks Goblin: MISS (Attack:8 vs Defense:11)"
        );
    }

    #[test]
    fn test_hit_rendering_includes_wound_and_death() {
        let result = CombatResult {
            attacker: "Hero".into(),
            defender: "Goblin".into(),
            attack_roll: 15,
            defense_roll: 6,
            hit: true,
            damage: 12,
            wound_level: Some(WoundLevel::Critical),
            defender_died: true,
        };
        let text = result.to_string();
        assert!(text.contains("HIT for 12 damage"));
        assert!(text.contains("Critical wound"));
        assert!(text.contains("DEFENDER DIED!"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let result = CombatResult {
            attacker: "A".into(),
            defender: "B".into(),
            attack_roll: 10,
            defense_roll: 9,
            hit: true,
            damage: 3,
            wound_level: Some(WoundLevel::Light),
            defender_died: false,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: CombatResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
