//! Shared single-elimination ladder builder and round queries used by every generator.

use crate::models::{GameMatch, MatchId, Round, Stage};

/// Deterministic id for the `index`-th (0-based) match of a round.
pub(crate) fn match_id(stage: Stage, round: u32, index: usize) -> MatchId {
    format!("{}-R{}-M{}", stage.id_prefix(), round, index + 1)
}

/// Display label for a round of a ladder with `rounds` rounds.
fn round_label(stage: Stage, round: u32, rounds: u32) -> String {
    match stage {
        Stage::Winners if round == rounds => "WINNER FINAL".to_string(),
        Stage::Winners if rounds > 1 && round + 1 == rounds => "WINNER SEMI FINAL".to_string(),
        Stage::Winners => format!("WINNER ROUND {}", round),
        Stage::LosersA if round == rounds => "LOSERS A FINAL".to_string(),
        Stage::LosersA => format!("LOSERS A ROUND {}", round),
        Stage::LosersB if round == rounds => "LOSERS B FINAL".to_string(),
        Stage::LosersB => format!("LOSERS B ROUND {}", round),
        Stage::SemiFinal => format!("SEMI FINAL ROUND {}", round),
        Stage::Final => "FINAL".to_string(),
    }
}

/// Build an empty ladder for `entrants` players (a power of two, at least 2).
///
/// Round `k` has `entrants >> k` matches; `match[2i]` and `match[2i+1]` of round `k`
/// both feed `match[i]` of round `k+1`. The last match has no successor.
/// Matches are returned round by round, in bracket order within each round.
pub(crate) fn build_ladder(stage: Stage, entrants: usize) -> Vec<GameMatch> {
    let rounds = entrants.trailing_zeros();
    let mut matches = Vec::with_capacity(entrants.saturating_sub(1));
    for round in 1..=rounds {
        let count = entrants >> round;
        for index in 0..count {
            let m = GameMatch::new(
                match_id(stage, round, index),
                round_label(stage, round, rounds),
                Round::new(stage, round),
            );
            let m = if round < rounds {
                m.with_next(match_id(stage, round + 1, index / 2))
            } else {
                m
            };
            matches.push(m);
        }
    }
    matches
}

/// Matches of one round, in list order.
pub(crate) fn round_matches(matches: &[GameMatch], round: Round) -> Vec<&GameMatch> {
    matches.iter().filter(|m| m.round == round).collect()
}

/// Ids of the matches of one round, in list order.
pub(crate) fn round_ids(matches: &[GameMatch], round: Round) -> Vec<MatchId> {
    round_matches(matches, round)
        .into_iter()
        .map(|m| m.id.clone())
        .collect()
}

/// Highest round number present for a stage.
pub(crate) fn last_round(matches: &[GameMatch], stage: Stage) -> Option<u32> {
    matches
        .iter()
        .filter(|m| m.round.stage == stage)
        .map(|m| m.round.number)
        .max()
}

/// Position of `source` among the matches of its own round. Drives the slot parity rule.
pub(crate) fn feeder_index(matches: &[GameMatch], source: &GameMatch) -> usize {
    matches
        .iter()
        .filter(|m| m.round == source.round)
        .position(|m| m.id == source.id)
        .unwrap_or(0)
}

/// The single deciding match of a losers branch.
pub(crate) fn branch_final(losers: &[GameMatch], stage: Stage) -> Option<&GameMatch> {
    let round = last_round(losers, stage)?;
    round_matches(losers, Round::new(stage, round)).into_iter().next()
}

/// The two winners-bracket matches feeding the winners final.
pub(crate) fn winners_semi_finals(winners: &[GameMatch]) -> Vec<&GameMatch> {
    match last_round(winners, Stage::Winners) {
        Some(last) if last > 1 => round_matches(winners, Round::new(Stage::Winners, last - 1)),
        _ => Vec::new(),
    }
}
