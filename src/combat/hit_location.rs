//! Hit location table
//!
//! Optional decoration for hosts that narrate where a blow lands. The
//! resolvers do not consult it; damage scaling is applied by the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::dice;

/// Body locations a blow can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyLocation {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

/// A located hit and its damage scaling
#[derive(Debug, Clone, PartialEq)]
pub struct HitLocationResult {
    pub location: BodyLocation,
    pub damage_multiplier: f64,
    pub description: &'static str,
}

/// Damage profile for a specific body location
pub fn location_profile(location: BodyLocation) -> HitLocationResult {
    match location {
        BodyLocation::Head => HitLocationResult {
            location,
            damage_multiplier: 1.5,
            description: "Head (1.5x damage)",
        },
        BodyLocation::Torso => HitLocationResult {
            location,
            damage_multiplier: 1.0,
            description: "Torso (normal damage)",
        },
        BodyLocation::RightArm => HitLocationResult {
            location,
            damage_multiplier: 0.75,
            description: "Right Arm (0.75x damage)",
        },
        BodyLocation::LeftArm => HitLocationResult {
            location,
            damage_multiplier: 0.75,
            description: "Left Arm (0.75x damage)",
        },
        BodyLocation::RightLeg => HitLocationResult {
            location,
            damage_multiplier: 0.75,
            description: "Right Leg (0.75x damage)",
        },
        BodyLocation::LeftLeg => HitLocationResult {
            location,
            damage_multiplier: 0.75,
            description: "Left Leg (0.75x damage)",
        },
    }
}

/// Roll a random hit location: 1-2 head, 3-6 torso, then one limb per face
pub fn roll_hit_location<R: Rng>(rng: &mut R) -> HitLocationResult {
    let location = match dice::d10(rng) {
        1 | 2 => BodyLocation::Head,
        3..=6 => BodyLocation::Torso,
        7 => BodyLocation::RightArm,
        8 => BodyLocation::LeftArm,
        9 => BodyLocation::RightLeg,
        _ => BodyLocation::LeftLeg,
    };
    location_profile(location)
}

/// Scale damage for a location, rounding to the nearest integer
pub fn apply_location_damage(base_damage: i32, location: BodyLocation) -> i32 {
    let profile = location_profile(location);
    (base_damage as f64 * profile.damage_multiplier).round() as i32
}
