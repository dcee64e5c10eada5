//! Ranged combat resolution
//!
//! Distance is banded against the weapon's thresholds; the band sets the
//! roll modifier and out-of-range shots miss unconditionally. Defense is
//! always a dodge.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::character::Character;
use crate::character::exhaustion;
use crate::character::wounds::WoundLevel;
use crate::core::dice;
use crate::core::error::{GreysteelError, Result};
use crate::equipment::ranged::RangedWeapon;

/// Distance bands for ranged attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeCategory {
    PointBlank,
    Short,
    Medium,
    Long,
    OutOfRange,
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeCategory::PointBlank => write!(f, "point-blank"),
            RangeCategory::Short => write!(f, "short"),
            RangeCategory::Medium => write!(f, "medium"),
            RangeCategory::Long => write!(f, "long"),
            RangeCategory::OutOfRange => write!(f, "out-of-range"),
        }
    }
}

/// Band a distance against a weapon's range thresholds
///
/// Anything within 5 units is point-blank regardless of the weapon.
pub fn determine_range(distance: i32, weapon: &RangedWeapon) -> RangeCategory {
    if distance <= 5 {
        RangeCategory::PointBlank
    } else if distance <= weapon.short_range {
        RangeCategory::Short
    } else if distance <= weapon.medium_range {
        RangeCategory::Medium
    } else if distance <= weapon.long_range {
        RangeCategory::Long
    } else {
        RangeCategory::OutOfRange
    }
}

/// Attack roll modifier for a range band
pub fn range_modifier(range: RangeCategory) -> i32 {
    match range {
        RangeCategory::PointBlank => 2,
        RangeCategory::Short => 0,
        RangeCategory::Medium => -2,
        RangeCategory::Long => -4,
        RangeCategory::OutOfRange => -10,
    }
}

/// Result of a single ranged attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangedCombatResult {
    pub attacker: String,
    pub defender: String,
    pub attack_roll: i32,
    pub defense_roll: i32,
    pub range: RangeCategory,
    pub hit: bool,
    pub damage: i32,
    /// Wound inflicted, absent on a miss or a fully-absorbed hit
    pub wound_level: Option<WoundLevel>,
    pub defender_died: bool,
}

impl fmt::Display for RangedCombatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.hit {
            return write!(
                f,
                "{} shoots at {} ({} range): MISS (Attack:{} vs Defense:{})",
                self.attacker, self.defender, self.range, self.attack_roll, self.defense_roll
            );
        }

        write!(
            f,
            "{} shoots at {} ({} range): HIT for {} damage (Attack:{} vs Defense:{})",
            self.attacker,
            self.defender,
            self.range,
            self.damage,
            self.attack_roll,
            self.defense_roll
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

/// Resolve one ranged attack
///
/// Fails with [`GreysteelError::NoRangedLoadout`] when the attacker has no
/// ranged capability; that is a caller error, not a miss. The cover penalty
/// is caller-supplied and normally zero or negative.
pub fn ranged_attack<R: Rng>(
    attacker: &Character,
    defender: &mut Character,
    distance: i32,
    aiming: bool,
    cover_penalty: i32,
    rng: &mut R,
) -> Result<RangedCombatResult> {
    let loadout = attacker
        .ranged
        .as_ref()
        .ok_or_else(|| GreysteelError::NoRangedLoadout {
            name: attacker.name.clone(),
        })?;

    let range = determine_range(distance, &loadout.weapon);
    let aiming_bonus = if aiming { 2 } else { 0 };

    let attack_roll = loadout.skill()
        + dice::d10(rng)
        + range_modifier(range)
        + aiming_bonus
        + attacker.wounds.total_penalty()
        + exhaustion::penalty(attacker.exhaustion)
        + cover_penalty;
    let defense_roll = defender.dodge_roll(rng);

    let hit = attack_roll > defense_roll && range != RangeCategory::OutOfRange;

    tracing::debug!(
        "{} shoots {} at {} range: attack {} against dodge {} ({})",
        attacker.name,
        defender.name,
        range,
        attack_roll,
        defense_roll,
        if hit { "hit" } else { "miss" }
    );

    if !hit {
        return Ok(RangedCombatResult {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            attack_roll,
            defense_roll,
            range,
            hit: false,
            damage: 0,
            wound_level: None,
            defender_died: false,
        });
    }

    let raw_damage = (attack_roll - defense_roll) + loadout.weapon.damage - defender.armor.protection;
    let damage = raw_damage.max(0);

    let mut wound_level = None;
    if damage > 0 {
        let level = WoundLevel::from_damage(damage, defender.attributes.constitution());
        defender.wounds.add_wound(level);
        wound_level = Some(level);
    }

    Ok(RangedCombatResult {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        attack_roll,
        defense_roll,
        range,
        hit: true,
        damage,
        wound_level,
        defender_died: defender.is_dead(),
    })
}
