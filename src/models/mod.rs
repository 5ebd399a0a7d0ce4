//! Data structures for the bracket engine: players, matches, tournament.

mod game;
mod player;
mod tournament;

pub use game::{GameInfo, GameMatch, MatchId, MatchStatus, Round, Score, Slot, Stage, DEFAULT_RACE_TO};
pub use player::{Player, PlayerId};
pub use tournament::{BracketError, BracketSet, Tournament, TournamentId, TournamentPhase};
