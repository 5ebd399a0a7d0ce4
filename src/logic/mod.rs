//! Bracket engine: generators, advancement, population, results.

mod advance;
mod ladder;
mod losers;
mod populate;
mod progress;
mod results;
mod scoring;
mod semi_final;
mod setup;
mod validate;
mod winners;

pub use advance::{advance_completed, advance_resolved, advance_winner, AdvanceOutcome, Advancement};
pub use losers::{
    generate_losers_bracket, generate_losers_bracket_for, MIN_DOUBLE_ELIMINATION_SIZE,
    STANDARD_BRACKET_SIZE,
};
pub use populate::{populate_losers_from_winners, populate_semi_final_from_brackets};
pub use progress::{report_score, simulate_and_report, sync_tournament};
pub use results::{can_start_semi_final, get_tournament_results, tournament_phase, TournamentResults};
pub use scoring::{record_score, simulate_match, simulate_score};
pub use semi_final::{generate_semi_final_stage, FINAL_ID, SEMI_FINAL_1_ID, SEMI_FINAL_2_ID};
pub use setup::{create_tournament, seed_players};
pub use validate::validate_bracket;
pub use winners::generate_winners_bracket;
