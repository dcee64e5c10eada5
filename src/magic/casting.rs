//! Spell casting resolution
//!
//! Casting is a roll against the spell's difficulty class; ties succeed,
//! unlike the strict comparisons of melee and ranged combat. Exhaustion is
//! charged to the general and magical ledgers identically: the full cost on
//! success, half (floored) on failure.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::character::Character;
use crate::character::exhaustion;
use crate::core::dice;
use crate::core::error::{GreysteelError, Result};
use crate::magic::spell::Spell;

/// Result of a spell casting attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCastResult {
    pub caster: String,
    pub spell: Spell,
    pub casting_roll: i32,
    pub difficulty_class: i32,
    pub success: bool,
    pub exhaustion_gained: i32,
    pub message: String,
}

impl fmt::Display for SpellCastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} casts {}: {} (Roll:{} vs DC:{}) - {}",
            self.caster,
            self.spell.name,
            if self.success { "SUCCESS" } else { "FAILED" },
            self.casting_roll,
            self.difficulty_class,
            self.message
        )
    }
}

/// Attempt to cast a spell
///
/// Fails with [`GreysteelError::NotAMagicUser`] when the caster has no
/// magical ability. An unprepared spell is a normal failure outcome with no
/// exhaustion charged, not an error.
pub fn cast_spell<R: Rng>(
    caster: &mut Character,
    spell: &Spell,
    rng: &mut R,
) -> Result<SpellCastResult> {
    let magic = caster
        .magic
        .as_mut()
        .ok_or_else(|| GreysteelError::NotAMagicUser {
            name: caster.name.clone(),
        })?;

    let difficulty_class = spell.difficulty_class();

    if !magic.is_prepared(spell) {
        return Ok(SpellCastResult {
            caster: caster.name.clone(),
            spell: spell.clone(),
            casting_roll: 0,
            difficulty_class,
            success: false,
            exhaustion_gained: 0,
            message: "Spell not prepared".into(),
        });
    }

    let casting_roll = magic.branch_skill(spell.branch)
        + dice::d10(rng)
        + caster.wounds.total_penalty()
        + exhaustion::penalty(caster.exhaustion)
        + exhaustion::penalty(magic.magical_exhaustion);

    let success = casting_roll >= difficulty_class;
    let cost = if success {
        spell.exhaustion_cost
    } else {
        spell.exhaustion_cost / 2
    };

    // Both ledgers are charged the same amount; with no intervening
    // recovery they stay equal under repeated casting.
    magic.magical_exhaustion = exhaustion::add(magic.magical_exhaustion, cost);
    caster.exhaustion = exhaustion::add(caster.exhaustion, cost);

    tracing::debug!(
        "{} casts {}: roll {} against DC {} ({}), {} exhaustion",
        caster.name,
        spell.name,
        casting_roll,
        difficulty_class,
        if success { "success" } else { "failure" },
        cost
    );

    let message = if success {
        format!("Successfully cast {}!", spell.name)
    } else {
        format!("Failed to cast {}. Gained {} exhaustion anyway.", spell.name, cost)
    };

    Ok(SpellCastResult {
        caster: caster.name.clone(),
        spell: spell.clone(),
        casting_roll,
        difficulty_class,
        success,
        exhaustion_gained: cost,
        message,
    })
}
