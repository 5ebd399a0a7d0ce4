//! Billiards club double-elimination bracket: library with models and bracket engine.

pub mod config;
pub mod import;
pub mod logic;
pub mod models;

pub use import::players_from_csv;
pub use logic::{
    advance_completed, advance_resolved, advance_winner, can_start_semi_final, create_tournament,
    generate_losers_bracket, generate_losers_bracket_for, generate_semi_final_stage,
    generate_winners_bracket, get_tournament_results, populate_losers_from_winners,
    populate_semi_final_from_brackets, record_score, report_score, seed_players,
    simulate_and_report, simulate_match, simulate_score, sync_tournament, tournament_phase,
    validate_bracket, AdvanceOutcome, Advancement, TournamentResults, FINAL_ID,
    MIN_DOUBLE_ELIMINATION_SIZE, SEMI_FINAL_1_ID, SEMI_FINAL_2_ID, STANDARD_BRACKET_SIZE,
};
pub use models::{
    BracketError, BracketSet, GameInfo, GameMatch, MatchId, MatchStatus, Player, PlayerId, Round,
    Score, Slot, Stage, Tournament, TournamentId, TournamentPhase, DEFAULT_RACE_TO,
};
