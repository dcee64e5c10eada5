//! Magical capability attached to a combatant
//!
//! Tracks per-branch skill, the prepared-spell list, and the magical
//! exhaustion ledger (independent of, and charged alongside, the general
//! one).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::magic::spell::{MagicBranch, Spell};

/// A combatant's magical abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicAbility {
    branch_skills: HashMap<MagicBranch, i32>,
    prepared_spells: Vec<Spell>,
    /// Magical fatigue ledger; see [`crate::character::exhaustion`]
    pub magical_exhaustion: i32,
}

impl MagicAbility {
    /// Fresh magical ability with every branch at skill 0
    pub fn new() -> Self {
        let branch_skills = MagicBranch::ALL.iter().map(|&b| (b, 0)).collect();
        Self {
            branch_skills,
            prepared_spells: Vec::new(),
            magical_exhaustion: 0,
        }
    }

    /// Set skill for one branch, clamped to 0-10
    pub fn set_branch_skill(&mut self, branch: MagicBranch, skill: i32) {
        self.branch_skills.insert(branch, skill.clamp(0, 10));
    }

    /// Skill for one branch, 0 when never trained
    pub fn branch_skill(&self, branch: MagicBranch) -> i32 {
        self.branch_skills.get(&branch).copied().unwrap_or(0)
    }

    /// Prepare a spell for casting; duplicates are ignored
    pub fn prepare_spell(&mut self, spell: Spell) {
        if !self.prepared_spells.contains(&spell) {
            self.prepared_spells.push(spell);
        }
    }

    pub fn prepared_spells(&self) -> &[Spell] {
        &self.prepared_spells
    }

    pub fn is_prepared(&self, spell: &Spell) -> bool {
        self.prepared_spells.contains(spell)
    }
}

impl Default for MagicAbility {
    fn default() -> Self {
        Self::new()
    }
}
