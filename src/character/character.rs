//! Combatant aggregate and roll composition
//!
//! A `Character` owns its attributes, equipment, wound state, and fatigue,
//! plus two optional capabilities (ranged loadout, magical ability). The
//! attack/parry/dodge rolls composed here feed every resolver.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::character::attributes::Attributes;
use crate::character::exhaustion;
use crate::character::wounds::Wounds;
use crate::core::dice;
use crate::equipment::armor::Armor;
use crate::equipment::ranged::RangedWeapon;
use crate::equipment::weapons::Weapon;
use crate::magic::caster::MagicAbility;

/// Ranged capability: a weapon and the skill to use it, always together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangedLoadout {
    pub weapon: RangedWeapon,
    skill: i32,
}

impl RangedLoadout {
    pub fn new(weapon: RangedWeapon, skill: i32) -> Self {
        Self {
            weapon,
            skill: clamp_skill(skill),
        }
    }

    pub fn skill(&self) -> i32 {
        self.skill
    }

    pub fn set_skill(&mut self, skill: i32) {
        self.skill = clamp_skill(skill);
    }
}

/// A combatant in the resolution engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub attributes: Attributes,
    weapon_skill: i32,
    dodge_skill: i32,
    pub weapon: Weapon,
    pub armor: Armor,
    pub wounds: Wounds,
    /// General fatigue ledger; see [`crate::character::exhaustion`]
    pub exhaustion: i32,
    /// Magical capability, absent for mundane combatants
    pub magic: Option<MagicAbility>,
    /// Ranged capability, absent for pure melee combatants
    pub ranged: Option<RangedLoadout>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        weapon_skill: i32,
        dodge_skill: i32,
        weapon: Weapon,
        armor: Armor,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            weapon_skill: clamp_skill(weapon_skill),
            dodge_skill: clamp_skill(dodge_skill),
            weapon,
            armor,
            wounds: Wounds::new(),
            exhaustion: 0,
            magic: None,
            ranged: None,
        }
    }

    pub fn weapon_skill(&self) -> i32 {
        self.weapon_skill
    }

    pub fn set_weapon_skill(&mut self, skill: i32) {
        self.weapon_skill = clamp_skill(skill);
    }

    pub fn dodge_skill(&self) -> i32 {
        self.dodge_skill
    }

    pub fn set_dodge_skill(&mut self, skill: i32) {
        self.dodge_skill = clamp_skill(skill);
    }

    /// Damage bonus from strength: -1 at 2 or below, +1 at 7+, +2 at 9+
    pub fn strength_bonus(&self) -> i32 {
        let strength = self.attributes.strength();
        if strength <= 2 {
            -1
        } else if strength >= 9 {
            2
        } else if strength >= 7 {
            1
        } else {
            0
        }
    }

    /// Attack roll: weapon skill + d10 + wound/armor/exhaustion penalties
    pub fn attack_roll<R: Rng>(&self, rng: &mut R) -> i32 {
        self.weapon_skill + dice::d10(rng) + self.roll_penalties()
    }

    /// Parry roll: weapon skill + d10 + wound/armor/exhaustion penalties
    pub fn parry_roll<R: Rng>(&self, rng: &mut R) -> i32 {
        self.weapon_skill + dice::d10(rng) + self.roll_penalties()
    }

    /// Dodge roll: dodge skill + d10 + wound/armor/exhaustion penalties
    pub fn dodge_roll<R: Rng>(&self, rng: &mut R) -> i32 {
        self.dodge_skill + dice::d10(rng) + self.roll_penalties()
    }

    pub fn is_dead(&self) -> bool {
        self.wounds.is_dead()
    }

    /// Penalty sum shared by every roll this combatant makes
    fn roll_penalties(&self) -> i32 {
        self.wounds.total_penalty()
            + self.armor.movement_penalty
            + exhaustion::penalty(self.exhaustion)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (STR:{} DEX:{} CON:{}) WeaponSkill:{} DodgeSkill:{} Weapon:{} Armor:{}",
            self.name,
            self.attributes.strength(),
            self.attributes.dexterity(),
            self.attributes.constitution(),
            self.weapon_skill,
            self.dodge_skill,
            self.weapon.name,
            self.armor.name
        )
    }
}

fn clamp_skill(skill: i32) -> i32 {
    skill.clamp(0, 10)
}
