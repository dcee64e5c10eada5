//! Learnable skills outside combat
//!
//! Skills carry a difficulty tier that scales advancement cost. Checks are
//! the usual d10 composition against a difficulty class; ties succeed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::dice;

/// How hard a skill is to learn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillDifficulty {
    Easy,
    Average,
    Hard,
    VeryHard,
}

impl SkillDifficulty {
    /// Multiplier applied to the per-level advancement cost
    fn cost_multiplier(self) -> i32 {
        match self {
            SkillDifficulty::Easy => 1,
            SkillDifficulty::Average | SkillDifficulty::Hard => 2,
            SkillDifficulty::VeryHard => 3,
        }
    }
}

/// A learnable skill with a level clamped to 0-10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub difficulty: SkillDifficulty,
    level: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, difficulty: SkillDifficulty, level: i32) -> Self {
        Self {
            name: name.into(),
            difficulty,
            level: level.clamp(0, 10),
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, 10);
    }

    /// Cost to advance this skill to the next level
    pub fn advancement_cost(&self) -> i32 {
        advancement_cost(self.difficulty, self.level)
    }

    /// Advance by one level; returns false at the level-10 cap
    pub fn advance(&mut self) -> bool {
        if self.level >= 10 {
            return false;
        }
        self.level += 1;
        true
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {}/10", self.name, self.difficulty, self.level)
    }
}

/// Advancement cost for a skill at a given level
pub fn advancement_cost(difficulty: SkillDifficulty, current_level: i32) -> i32 {
    (current_level + 1) * difficulty.cost_multiplier()
}

/// Skill check: level + d10 + modifiers against a difficulty class
pub fn skill_check<R: Rng>(
    skill_level: i32,
    difficulty_class: i32,
    modifiers: i32,
    rng: &mut R,
) -> bool {
    skill_level + dice::d10(rng) + modifiers >= difficulty_class
}
