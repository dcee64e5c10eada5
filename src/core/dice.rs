//! Die rolling over a caller-supplied random source
//!
//! The engine owns no randomness: every roll draws from a `rand::Rng`
//! passed in by the caller, so hosts and tests control determinism.

use rand::Rng;

/// Roll a single ten-sided die (1-10 inclusive)
pub fn d10<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(1..=10)
}

/// Roll `count` ten-sided dice and sum the results
pub fn roll_multiple<R: Rng>(rng: &mut R, count: u32) -> i32 {
    (0..count).map(|_| d10(rng)).sum()
}
