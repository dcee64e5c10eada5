//! Exhaustion ledger and its penalty ladder
//!
//! The ledger is a bare counter owned by the combatant (plus a second,
//! independent one for magical fatigue). Resolvers only ever charge it;
//! recovery is an explicit host operation.

/// Roll penalty for a given exhaustion level
pub fn penalty(exhaustion: i32) -> i32 {
    if exhaustion <= 0 {
        0
    } else if exhaustion <= 5 {
        -1
    } else if exhaustion <= 10 {
        -2
    } else if exhaustion <= 15 {
        -3
    } else {
        -4
    }
}

/// Charge exhaustion for an action
pub fn add(current: i32, amount: i32) -> i32 {
    current + amount
}

/// Recover exhaustion during rest, flooring at zero
pub fn recover(current: i32, amount: i32) -> i32 {
    (current - amount).max(0)
}

/// Display text for an exhaustion level
pub fn description(exhaustion: i32) -> &'static str {
    if exhaustion <= 0 {
        "Fresh"
    } else if exhaustion <= 5 {
        "Slightly Tired (-1)"
    } else if exhaustion <= 10 {
        "Tired (-2)"
    } else if exhaustion <= 15 {
        "Exhausted (-3)"
    } else {
        "Completely Exhausted (-4)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_ladder_boundaries() {
        assert_eq!(penalty(0), 0);
        assert_eq!(penalty(1), -1);
        assert_eq!(penalty(5), -1);
        assert_eq!(penalty(6), -2);
        assert_eq!(penalty(10), -2);
        assert_eq!(penalty(11), -3);
        assert_eq!(penalty(15), -3);
        assert_eq!(penalty(16), -4);
        assert_eq!(penalty(1000), -4);
    }

    #[test]
    fn test_negative_exhaustion_has_no_penalty() {
        assert_eq!(penalty(-5), 0);
    }

    #[test]
    fn test_add_accumulates() {
        assert_eq!(add(0, 1), 1);
        assert_eq!(add(4, 3), 7);
    }

    #[test]
    fn test_recover_floors_at_zero() {
        assert_eq!(recover(3, 1), 2);
        assert_eq!(recover(1, 5), 0);
        assert_eq!(recover(0, 1), 0);
    }

    #[test]
    fn test_descriptions_match_ladder() {
        assert_eq!(description(0), "Fresh");
        assert_eq!(description(5), "Slightly Tired (-1)");
        assert_eq!(description(10), "Tired (-2)");
        assert_eq!(description(15), "Exhausted (-3)");
        assert_eq!(description(16), "Completely Exhausted (-4)");
    }
}
