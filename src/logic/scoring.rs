//! Recording scores, and random race-to-N scores for demo brackets.

use crate::models::{BracketError, GameMatch, MatchStatus, Score};
use rand::Rng;

/// Record a score and status on one match, returning the new list.
///
/// Both players must be seated, the match must not already be completed, and a
/// completed match needs a winner (no tie). A scored match is at least in progress,
/// so `Pending` is stored as `InProgress`.
pub fn record_score(
    matches: &[GameMatch],
    match_id: &str,
    score: Score,
    status: MatchStatus,
) -> Result<Vec<GameMatch>, BracketError> {
    let mut next = matches.to_vec();
    let m = next
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    if m.is_completed() {
        return Err(BracketError::MatchAlreadyCompleted(m.id.clone()));
    }
    if !m.has_both_players() {
        return Err(BracketError::EmptySlot(m.id.clone()));
    }
    if status == MatchStatus::Completed && score.leader().is_none() {
        return Err(BracketError::UnresolvedScore(m.id.clone()));
    }
    m.score = Some(score);
    m.status = match status {
        MatchStatus::Pending => MatchStatus::InProgress,
        other => other,
    };
    Ok(next)
}

/// Random final score of a race to `race_to` racks: one side reaches the target,
/// the other stays below it.
pub fn simulate_score<R: Rng>(rng: &mut R, race_to: u32) -> Score {
    let race_to = race_to.max(1);
    let loser = rng.gen_range(0..race_to);
    if rng.gen_bool(0.5) {
        Score::new(race_to, loser)
    } else {
        Score::new(loser, race_to)
    }
}

/// Play out one match with a random score and mark it completed.
pub fn simulate_match<R: Rng>(
    matches: &[GameMatch],
    match_id: &str,
    rng: &mut R,
) -> Result<Vec<GameMatch>, BracketError> {
    let race_to = matches
        .iter()
        .find(|m| m.id == match_id)
        .map(|m| m.game_info.race_to)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    let score = simulate_score(rng, race_to);
    record_score(matches, match_id, score, MatchStatus::Completed)
}
