//! Score reports on a whole tournament: record, then push every resolved result downstream.

use crate::logic::advance::advance_resolved;
use crate::logic::populate::{populate_losers_from_winners, populate_semi_final_from_brackets};
use crate::logic::results::{can_start_semi_final, get_tournament_results};
use crate::logic::scoring::{record_score, simulate_score};
use crate::models::{BracketError, BracketSet, MatchStatus, Score, Tournament};
use rand::Rng;

/// Record a score on any match of the tournament and sync all sets.
/// Semi-final stage matches are refused until `can_start_semi_final` holds.
pub fn report_score(
    tournament: &mut Tournament,
    match_id: &str,
    score: Score,
    status: MatchStatus,
) -> Result<(), BracketError> {
    let set = tournament
        .set_of(match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    if set == BracketSet::SemiFinals
        && !can_start_semi_final(&tournament.winners, &tournament.losers)
    {
        return Err(BracketError::SemiFinalNotReady(match_id.to_string()));
    }
    let updated = record_score(tournament.matches(set), match_id, score, status)?;
    tournament.replace(set, updated);
    sync_tournament(tournament);

    if status == MatchStatus::Completed {
        log::debug!(
            "Tournament {}: {} completed {}-{}",
            tournament.id,
            match_id,
            score.player1,
            score.player2
        );
        if let Some(champion) = get_tournament_results(&tournament.semi_finals).champion {
            log::info!("Tournament {} won by {}", tournament.id, champion.name);
        }
    }
    Ok(())
}

/// Random race-to-N result for one match, reported like any other score.
pub fn simulate_and_report<R: Rng>(
    tournament: &mut Tournament,
    match_id: &str,
    rng: &mut R,
) -> Result<Score, BracketError> {
    let race_to = tournament
        .find_match(match_id)
        .map(|m| m.game_info.race_to)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    let score = simulate_score(rng, race_to);
    report_score(tournament, match_id, score, MatchStatus::Completed)?;
    Ok(score)
}

/// Advance and populate everything that can move: winners, losers branches, then the
/// semi-final stage. Safe to call any number of times.
pub fn sync_tournament(tournament: &mut Tournament) {
    let winners = advance_resolved(&tournament.winners);
    let losers = populate_losers_from_winners(&winners, &tournament.losers);
    let losers = advance_resolved(&losers);
    let semi_finals = populate_semi_final_from_brackets(&winners, &losers, &tournament.semi_finals);
    let semi_finals = advance_resolved(&semi_finals);

    tournament.replace(BracketSet::Winners, winners);
    tournament.replace(BracketSet::Losers, losers);
    tournament.replace(BracketSet::SemiFinals, semi_finals);
}
