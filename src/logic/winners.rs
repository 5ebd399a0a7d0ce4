//! Winners bracket: the single-elimination ladder every entrant starts in.

use crate::logic::ladder::build_ladder;
use crate::models::{BracketError, GameMatch, Player, Stage};
use std::collections::HashSet;

/// Generate the winners ladder for `players` (in seeding order).
///
/// Round 1 pairs `players[2i]` with `players[2i+1]`; later rounds start empty.
/// Produces `n - 1` matches, exactly one of which (the winners final) has no successor.
pub fn generate_winners_bracket(players: &[Player]) -> Result<Vec<GameMatch>, BracketError> {
    let n = players.len();
    if n < 2 || !n.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(n));
    }
    let mut seen = HashSet::with_capacity(n);
    for p in players {
        if !seen.insert(p.id.as_str()) {
            return Err(BracketError::DuplicatePlayer(p.id.clone()));
        }
    }

    // Round 1 comes first in the ladder and takes every pair.
    let mut pairs = players.chunks_exact(2);
    let matches = build_ladder(Stage::Winners, n)
        .into_iter()
        .map(|m| match pairs.next() {
            Some(pair) => m.with_players(pair[0].clone(), pair[1].clone()),
            None => m,
        })
        .collect();
    Ok(matches)
}
