//! The nine core attributes of a combatant
//!
//! Attributes fall into physical, mental, and interactive groups.
//! Every write is clamped to 1-10.

use serde::{Deserialize, Serialize};

/// Attribute block for one combatant, each value clamped to 1-10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    reason: i32,
    intuition: i32,
    willpower: i32,
    charisma: i32,
    perception: i32,
    empathy: i32,
}

impl Attributes {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        reason: i32,
        intuition: i32,
        willpower: i32,
        charisma: i32,
        perception: i32,
        empathy: i32,
    ) -> Self {
        Self {
            strength: clamp(strength),
            dexterity: clamp(dexterity),
            constitution: clamp(constitution),
            reason: clamp(reason),
            intuition: clamp(intuition),
            willpower: clamp(willpower),
            charisma: clamp(charisma),
            perception: clamp(perception),
            empathy: clamp(empathy),
        }
    }

    /// Physical: raw muscle
    pub fn strength(&self) -> i32 {
        self.strength
    }

    /// Physical: agility and fine coordination
    pub fn dexterity(&self) -> i32 {
        self.dexterity
    }

    /// Physical: toughness and resilience
    pub fn constitution(&self) -> i32 {
        self.constitution
    }

    /// Mental: logic and analysis
    pub fn reason(&self) -> i32 {
        self.reason
    }

    /// Mental: gut feeling
    pub fn intuition(&self) -> i32 {
        self.intuition
    }

    /// Mental: resolve
    pub fn willpower(&self) -> i32 {
        self.willpower
    }

    /// Interactive: presence
    pub fn charisma(&self) -> i32 {
        self.charisma
    }

    /// Interactive: awareness of surroundings
    pub fn perception(&self) -> i32 {
        self.perception
    }

    /// Interactive: reading others
    pub fn empathy(&self) -> i32 {
        self.empathy
    }

    pub fn set_strength(&mut self, value: i32) {
        self.strength = clamp(value);
    }

    pub fn set_dexterity(&mut self, value: i32) {
        self.dexterity = clamp(value);
    }

    pub fn set_constitution(&mut self, value: i32) {
        self.constitution = clamp(value);
    }

    pub fn set_reason(&mut self, value: i32) {
        self.reason = clamp(value);
    }

    pub fn set_intuition(&mut self, value: i32) {
        self.intuition = clamp(value);
    }

    pub fn set_willpower(&mut self, value: i32) {
        self.willpower = clamp(value);
    }

    pub fn set_charisma(&mut self, value: i32) {
        self.charisma = clamp(value);
    }

    pub fn set_perception(&mut self, value: i32) {
        self.perception = clamp(value);
    }

    pub fn set_empathy(&mut self, value: i32) {
        self.empathy = clamp(value);
    }

    /// Derived stamina: (strength + constitution) / 2, integer division
    pub fn stamina(&self) -> i32 {
        (self.strength + self.constitution) / 2
    }
}

fn clamp(value: i32) -> i32 {
    value.clamp(1, 10)
}
