//! Semi-final stage: two semi-finals merging winners-side and losers-side players, then the final.

use crate::models::{GameMatch, Round, Stage};

pub const SEMI_FINAL_1_ID: &str = "SF-1";
pub const SEMI_FINAL_2_ID: &str = "SF-2";
pub const FINAL_ID: &str = "F";

/// Generate the 3-match stage with empty slots.
///
/// Semi-final 1 takes winners semi-final 1's winner against the branch A champion,
/// semi-final 2 the same with branch B. Both feed the final, which ends the tournament.
pub fn generate_semi_final_stage() -> Vec<GameMatch> {
    let round = Round::new(Stage::SemiFinal, 1);
    vec![
        GameMatch::new(SEMI_FINAL_1_ID, "SEMI FINAL ROUND 1", round).with_next(FINAL_ID),
        GameMatch::new(SEMI_FINAL_2_ID, "SEMI FINAL ROUND 2", round).with_next(FINAL_ID),
        GameMatch::new(FINAL_ID, "FINAL", Round::new(Stage::Final, 1)),
    ]
}
