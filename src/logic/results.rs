//! Semi-final readiness, final placements and tournament phase.

use crate::logic::ladder::{branch_final, last_round, round_matches, winners_semi_finals};
use crate::models::{GameMatch, Player, Round, Stage, Tournament, TournamentPhase};
use serde::Serialize;

/// Final placements. All fields empty means the tournament is not finished, not an error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion: Option<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_up: Option<Player>,
    /// Losers of the resolved semi-finals (0, 1 or 2 players).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub third_place: Vec<Player>,
}

impl TournamentResults {
    pub fn is_finished(&self) -> bool {
        self.champion.is_some()
    }
}

/// True iff both winners semi-finals and both losers branch finals are completed
/// with a resolvable winner. Never fails.
pub fn can_start_semi_final(winners: &[GameMatch], losers: &[GameMatch]) -> bool {
    let semis = winners_semi_finals(winners);
    let winners_done = semis.len() == 2 && semis.iter().all(|m| m.winner().is_some());
    let branch_done = |stage| branch_final(losers, stage).is_some_and(|m| m.winner().is_some());
    winners_done && branch_done(Stage::LosersA) && branch_done(Stage::LosersB)
}

/// Read placements from the semi-final stage.
pub fn get_tournament_results(semi_finals: &[GameMatch]) -> TournamentResults {
    let final_match = last_round(semi_finals, Stage::Final)
        .and_then(|round| round_matches(semi_finals, Round::new(Stage::Final, round)).into_iter().next());

    let third_place = round_matches(semi_finals, Round::new(Stage::SemiFinal, 1))
        .into_iter()
        .filter_map(GameMatch::loser)
        .cloned()
        .collect();

    TournamentResults {
        champion: final_match.and_then(GameMatch::winner).cloned(),
        runner_up: final_match.and_then(GameMatch::loser).cloned(),
        third_place,
    }
}

/// Where a tournament currently stands.
pub fn tournament_phase(tournament: &Tournament) -> TournamentPhase {
    if get_tournament_results(&tournament.semi_finals).is_finished() {
        TournamentPhase::Completed
    } else if can_start_semi_final(&tournament.winners, &tournament.losers) {
        TournamentPhase::SemiFinals
    } else {
        TournamentPhase::Brackets
    }
}
