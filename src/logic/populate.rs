//! Population: cross-set advancement where source and destination live in different match sets.
//!
//! Only empty slots are filled, and only from completed matches with a non-tied score,
//! so repeated calls are no-ops.

use crate::logic::advance::{fill_slot, SlotFill};
use crate::logic::ladder::{branch_final, round_ids, round_matches, winners_semi_finals};
use crate::logic::semi_final::{SEMI_FINAL_1_ID, SEMI_FINAL_2_ID};
use crate::models::{GameMatch, Player, Round, Slot, Stage};

/// Move winners round 1 losers into losers A round 1 and winners round 2 losers into
/// losers B round 1. Source match `i` feeds target match `i / 2`, slot by parity of `i`.
pub fn populate_losers_from_winners(winners: &[GameMatch], losers: &[GameMatch]) -> Vec<GameMatch> {
    let mut next = losers.to_vec();
    feed_branch(winners, 1, &mut next, Stage::LosersA);
    feed_branch(winners, 2, &mut next, Stage::LosersB);
    next
}

fn feed_branch(winners: &[GameMatch], winners_round: u32, losers: &mut [GameMatch], branch: Stage) {
    let targets = round_ids(losers, Round::new(branch, 1));
    let sources = round_matches(winners, Round::new(Stage::Winners, winners_round));
    for (index, source) in sources.into_iter().enumerate() {
        let Some(loser) = source.loser() else {
            if source.is_completed() {
                log::debug!("Populate: {} has no resolvable loser, skipped", source.id);
            }
            continue;
        };
        let Some(target_id) = targets.get(index / 2) else {
            continue;
        };
        put(losers, target_id, Slot::for_feeder_index(index), loser.clone());
    }
}

/// Fill the semi-final stage: each winners semi-final winner takes slot one of its
/// semi-final, branch A's champion slot two of semi-final 1, branch B's of semi-final 2.
pub fn populate_semi_final_from_brackets(
    winners: &[GameMatch],
    losers: &[GameMatch],
    semi_finals: &[GameMatch],
) -> Vec<GameMatch> {
    let mut next = semi_finals.to_vec();
    let targets = [SEMI_FINAL_1_ID, SEMI_FINAL_2_ID];

    for (source, target_id) in winners_semi_finals(winners).into_iter().zip(targets) {
        if let Some(winner) = source.winner() {
            put(&mut next, target_id, Slot::One, winner.clone());
        }
    }
    for (branch, target_id) in [Stage::LosersA, Stage::LosersB].into_iter().zip(targets) {
        if let Some(champion) = branch_final(losers, branch).and_then(GameMatch::winner) {
            put(&mut next, target_id, Slot::Two, champion.clone());
        }
    }
    next
}

fn put(matches: &mut [GameMatch], target_id: &str, slot: Slot, player: Player) {
    let Some(target) = matches.iter_mut().find(|m| m.id == target_id) else {
        return;
    };
    if fill_slot(target, slot, player) == SlotFill::Occupied {
        log::debug!("Populate: slot {:?} of {} already filled", slot, target_id);
    }
}
