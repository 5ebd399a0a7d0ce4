//! Advancement: move a match winner into its successor's slot.
//!
//! All functions take a snapshot and return a new one; the input is never mutated.

use crate::logic::ladder::feeder_index;
use crate::models::{BracketError, GameMatch, MatchId, Player, Slot};
use serde::Serialize;

/// What an advancement call did. Every variant except `Advanced` leaves the matches unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// Winner written into `slot` of `next_match_id`.
    Advanced { next_match_id: MatchId, slot: Slot },
    /// Winner was already in the successor (repeat call).
    AlreadyAdvanced { next_match_id: MatchId, slot: Slot },
    /// Target slot holds a different player.
    SlotOccupied { next_match_id: MatchId, slot: Slot },
    MatchNotFound,
    /// Match is the last of its set.
    NoSuccessor,
    /// Winner id is in neither slot of the match.
    WinnerNotInMatch,
    /// `next_match_id` names no match in this set.
    SuccessorNotFound,
}

impl AdvanceOutcome {
    pub fn is_advanced(&self) -> bool {
        matches!(self, AdvanceOutcome::Advanced { .. })
    }
}

/// New match list plus what happened.
#[derive(Clone, Debug)]
pub struct Advancement {
    pub matches: Vec<GameMatch>,
    pub outcome: AdvanceOutcome,
}

/// Result of writing a player into a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SlotFill {
    Filled,
    AlreadyPresent(Slot),
    Occupied,
}

/// Write `player` into `slot` of `target` unless the slot is taken. Never overwrites.
pub(crate) fn fill_slot(target: &mut GameMatch, slot: Slot, player: Player) -> SlotFill {
    if let Some(existing) = target.slot_of(&player.id) {
        return SlotFill::AlreadyPresent(existing);
    }
    let entry = target.player_mut(slot);
    if entry.is_some() {
        return SlotFill::Occupied;
    }
    *entry = Some(player);
    SlotFill::Filled
}

/// Advance `winner_id` from `match_id` into the successor match.
///
/// The slot is chosen by the parity of the source match within its round, so the
/// layout does not depend on completion order. Malformed ids give a no-op outcome.
/// Does not look at score or status: resolve the winner first (see [`advance_completed`]).
pub fn advance_winner(matches: &[GameMatch], match_id: &str, winner_id: &str) -> Advancement {
    let mut next = matches.to_vec();
    let outcome = apply_advance(&mut next, match_id, winner_id);
    Advancement {
        matches: next,
        outcome,
    }
}

/// Resolve the winner of a completed match and advance it.
/// Fails with `UnresolvedScore` on a tie, before anything is moved.
pub fn advance_completed(matches: &[GameMatch], match_id: &str) -> Result<Advancement, BracketError> {
    let source = matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    let winner_id = source.resolve_winner()?.id.clone();
    Ok(advance_winner(matches, match_id, &winner_id))
}

/// Advance every completed, resolvable match in list order. Ties and pending matches are skipped.
pub fn advance_resolved(matches: &[GameMatch]) -> Vec<GameMatch> {
    let mut next = matches.to_vec();
    let ready: Vec<(MatchId, String)> = matches
        .iter()
        .filter(|m| m.next_match_id.is_some())
        .filter_map(|m| m.winner().map(|w| (m.id.clone(), w.id.clone())))
        .collect();
    for (match_id, winner_id) in ready {
        apply_advance(&mut next, &match_id, &winner_id);
    }
    next
}

fn apply_advance(matches: &mut [GameMatch], match_id: &str, winner_id: &str) -> AdvanceOutcome {
    let Some(source) = matches.iter().find(|m| m.id == match_id) else {
        log::debug!("Advance: match {} not found", match_id);
        return AdvanceOutcome::MatchNotFound;
    };
    let Some(next_match_id) = source.next_match_id.clone() else {
        return AdvanceOutcome::NoSuccessor;
    };
    let Some(winner) = source
        .slot_of(winner_id)
        .and_then(|slot| source.player(slot))
        .cloned()
    else {
        log::debug!("Advance: {} is not playing in {}", winner_id, match_id);
        return AdvanceOutcome::WinnerNotInMatch;
    };
    let slot = Slot::for_feeder_index(feeder_index(matches, source));

    let Some(target) = matches.iter_mut().find(|m| m.id == next_match_id) else {
        return AdvanceOutcome::SuccessorNotFound;
    };
    match fill_slot(target, slot, winner) {
        SlotFill::Filled => AdvanceOutcome::Advanced { next_match_id, slot },
        SlotFill::AlreadyPresent(slot) => AdvanceOutcome::AlreadyAdvanced { next_match_id, slot },
        SlotFill::Occupied => {
            log::warn!(
                "Advance: slot {:?} of {} already taken, {} not moved",
                slot,
                next_match_id,
                winner_id
            );
            AdvanceOutcome::SlotOccupied { next_match_id, slot }
        }
    }
}
