//! Losers bracket: two independent feeder branches.
//!
//! Branch A takes the losers of winners round 1, branch B the losers of winners round 2.
//! Both start empty and are filled by `populate_losers_from_winners`. Each branch final
//! ends its own set; the hop into the semi-final stage is done by population.

use crate::logic::ladder::build_ladder;
use crate::models::{BracketError, GameMatch, Stage};

/// Bracket size the club runs: 16 entrants.
pub const STANDARD_BRACKET_SIZE: usize = 16;

/// Smallest bracket that still gives branch B a match (8 entrants: 4 into A, 2 into B).
pub const MIN_DOUBLE_ELIMINATION_SIZE: usize = 8;

/// Losers branches for the standard 16-entrant bracket:
/// branch A 4-2-1 matches, branch B 2-1 matches.
pub fn generate_losers_bracket() -> Vec<GameMatch> {
    losers_branches(STANDARD_BRACKET_SIZE)
}

/// Losers branches for a winners bracket of `bracket_size` entrants.
pub fn generate_losers_bracket_for(bracket_size: usize) -> Result<Vec<GameMatch>, BracketError> {
    if bracket_size < MIN_DOUBLE_ELIMINATION_SIZE || !bracket_size.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(bracket_size));
    }
    Ok(losers_branches(bracket_size))
}

fn losers_branches(bracket_size: usize) -> Vec<GameMatch> {
    let mut matches = build_ladder(Stage::LosersA, bracket_size / 2);
    matches.extend(build_ladder(Stage::LosersB, bracket_size / 4));
    matches
}
