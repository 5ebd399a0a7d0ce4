//! Setup: seed entrants and generate every match set of a new tournament.

use crate::logic::losers::{generate_losers_bracket_for, MIN_DOUBLE_ELIMINATION_SIZE};
use crate::logic::semi_final::generate_semi_final_stage;
use crate::logic::validate::validate_bracket;
use crate::logic::winners::generate_winners_bracket;
use crate::models::{BracketError, Player, Tournament};
use rand::seq::SliceRandom;
use rand::Rng;

/// Create a tournament for `players` in seeding order.
/// Needs a power of two of at least 8 entrants with unique ids.
pub fn create_tournament(
    name: impl Into<String>,
    players: Vec<Player>,
) -> Result<Tournament, BracketError> {
    let n = players.len();
    if n < MIN_DOUBLE_ELIMINATION_SIZE || !n.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(n));
    }
    let winners = generate_winners_bracket(&players)?;
    let losers = generate_losers_bracket_for(n)?;
    let semi_finals = generate_semi_final_stage();
    for set in [&winners, &losers, &semi_finals] {
        validate_bracket(set)?;
    }

    let tournament = Tournament::new(name, players, winners, losers, semi_finals);
    log::info!(
        "Created tournament {} ({}) with {} players",
        tournament.id,
        tournament.name,
        n
    );
    Ok(tournament)
}

/// Random seeding: shuffle entrants before generating the bracket.
pub fn seed_players<R: Rng>(players: &mut [Player], rng: &mut R) {
    players.shuffle(rng);
}
