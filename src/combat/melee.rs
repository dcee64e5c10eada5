//! Melee combat resolution
//!
//! One call resolves one exchange: opposed rolls, strict-greater hit check,
//! damage against armor, wound application, death flag. The attacker is
//! never mutated; the defender's wound state is.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::character::Character;
use crate::character::wounds::WoundLevel;
use crate::combat::maneuvers::ManeuverType;
use crate::combat::result::CombatResult;

/// How the defender responds to a melee attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DefenseAction {
    /// Oppose with weapon skill
    #[default]
    Parry,
    /// Oppose with dodge skill
    Dodge,
}

/// Resolve one melee exchange with no maneuvers on either side
pub fn combat_round<R: Rng>(
    attacker: &Character,
    defender: &mut Character,
    defense: DefenseAction,
    rng: &mut R,
) -> CombatResult {
    combat_round_with_maneuvers(
        attacker,
        defender,
        defense,
        ManeuverType::Normal,
        ManeuverType::Normal,
        rng,
    )
}

/// Resolve one melee exchange with the chosen maneuvers applied
///
/// The attacker's maneuver adjusts the attack roll and damage; the
/// defender's maneuver adjusts the defense roll. Ties miss.
pub fn combat_round_with_maneuvers<R: Rng>(
    attacker: &Character,
    defender: &mut Character,
    defense: DefenseAction,
    attacker_maneuver: ManeuverType,
    defender_maneuver: ManeuverType,
    rng: &mut R,
) -> CombatResult {
    let attacker_mods = attacker_maneuver.modifiers();
    let defender_mods = defender_maneuver.modifiers();

    let attack_roll = attacker.attack_roll(rng) + attacker_mods.attack_bonus;
    let defense_roll = match defense {
        DefenseAction::Parry => defender.parry_roll(rng),
        DefenseAction::Dodge => defender.dodge_roll(rng),
    } + defender_mods.defense_bonus;

    let hit = attack_roll > defense_roll;

    tracing::debug!(
        "{} vs {}: attack {} against defense {} ({})",
        attacker.name,
        defender.name,
        attack_roll,
        defense_roll,
        if hit { "hit" } else { "miss" }
    );

    if !hit {
        return CombatResult {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            attack_roll,
            defense_roll,
            hit: false,
            damage: 0,
            wound_level: None,
            defender_died: false,
        };
    }

    let raw_damage = (attack_roll - defense_roll)
        + attacker.strength_bonus()
        + attacker.weapon.damage()
        + attacker_mods.damage_bonus
        - defender.armor.protection;
    let damage = raw_damage.max(0);

    let mut wound_level = None;
    if damage > 0 {
        let level = WoundLevel::from_damage(damage, defender.attributes.constitution());
        defender.wounds.add_wound(level);
        wound_level = Some(level);
    }

    CombatResult {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        attack_roll,
        defense_roll,
        hit: true,
        damage,
        wound_level,
        defender_died: defender.is_dead(),
    }
}
