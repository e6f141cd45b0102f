use super::domain::{Level, PerTrait, TraitKey};

/// Upper bound of the `Low` band.
pub const LOW_CEILING: u8 = 8;
/// Upper bound of the `Medium` band.
pub const MEDIUM_CEILING: u8 = 16;

/// Traits ordered by normalized score, highest first. The sort is stable over the canonical
/// `D, I, S, C` order, so ties keep that order.
pub fn rank(normalized: &PerTrait<u8>) -> [TraitKey; 4] {
    let mut ranked = TraitKey::CANONICAL;
    ranked.sort_by(|a, b| normalized[*b].cmp(&normalized[*a]));
    ranked
}

/// Primary and secondary traits; always two distinct keys.
pub fn primary_and_secondary(normalized: &PerTrait<u8>) -> (TraitKey, TraitKey) {
    let ranked = rank(normalized);
    (ranked[0], ranked[1])
}

pub fn level_for(score: u8) -> Level {
    if score <= LOW_CEILING {
        Level::Low
    } else if score <= MEDIUM_CEILING {
        Level::Medium
    } else {
        Level::High
    }
}
