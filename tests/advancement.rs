//! Integration tests for advancing winners through a ladder.

use billiards_bracket::{
    advance_completed, advance_resolved, advance_winner, generate_winners_bracket, record_score,
    AdvanceOutcome, BracketError, GameMatch, MatchStatus, Player, Score, Slot,
};

fn players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{i}"), format!("Player {i}")).unwrap())
        .collect()
}

fn complete(matches: &[GameMatch], id: &str, p1: u32, p2: u32) -> Vec<GameMatch> {
    record_score(matches, id, Score::new(p1, p2), MatchStatus::Completed).unwrap()
}

fn find<'a>(matches: &'a [GameMatch], id: &str) -> &'a GameMatch {
    matches.iter().find(|m| m.id == id).unwrap()
}

fn slot_ids(m: &GameMatch) -> (Option<&str>, Option<&str>) {
    (
        m.player1.as_ref().map(|p| p.id.as_str()),
        m.player2.as_ref().map(|p| p.id.as_str()),
    )
}

#[test]
fn round_one_winners_fill_round_two_in_parity_order() {
    let mut matches = generate_winners_bracket(&players(16)).unwrap();
    for i in 1..=8 {
        let id = format!("W-R1-M{i}");
        matches = complete(&matches, &id, 2, 0);
        let winner = find(&matches, &id).winner().unwrap().id.clone();
        let adv = advance_winner(&matches, &id, &winner);
        assert!(adv.outcome.is_advanced(), "{id}: {:?}", adv.outcome);
        matches = adv.matches;
    }
    for (i, expected) in [("p0", "p2"), ("p4", "p6"), ("p8", "p10"), ("p12", "p14")]
        .into_iter()
        .enumerate()
    {
        let m = find(&matches, &format!("W-R2-M{}", i + 1));
        assert_eq!(slot_ids(m), (Some(expected.0), Some(expected.1)));
    }
}

#[test]
fn layout_does_not_depend_on_completion_order() {
    let mut matches = generate_winners_bracket(&players(8)).unwrap();
    // Second feeder finishes first; it still lands in slot two.
    matches = complete(&matches, "W-R1-M2", 1, 3);
    let adv = advance_winner(&matches, "W-R1-M2", "p3");
    assert_eq!(
        adv.outcome,
        AdvanceOutcome::Advanced {
            next_match_id: "W-R2-M1".to_string(),
            slot: Slot::Two,
        }
    );
    assert_eq!(slot_ids(find(&adv.matches, "W-R2-M1")), (None, Some("p3")));
}

#[test]
fn advancing_twice_is_idempotent() {
    let matches = complete(&generate_winners_bracket(&players(8)).unwrap(), "W-R1-M1", 3, 1);
    let first = advance_winner(&matches, "W-R1-M1", "p0");
    let second = advance_winner(&first.matches, "W-R1-M1", "p0");
    assert_eq!(
        second.outcome,
        AdvanceOutcome::AlreadyAdvanced {
            next_match_id: "W-R2-M1".to_string(),
            slot: Slot::One,
        }
    );
    assert_eq!(second.matches, first.matches);
    assert_eq!(slot_ids(find(&second.matches, "W-R2-M1")), (Some("p0"), None));
}

#[test]
fn occupied_slot_is_reported_not_overwritten() {
    let matches = generate_winners_bracket(&players(8)).unwrap();
    let first = advance_winner(&matches, "W-R1-M1", "p0");
    // A different player from the same feeder would need the same slot.
    let second = advance_winner(&first.matches, "W-R1-M1", "p1");
    assert_eq!(
        second.outcome,
        AdvanceOutcome::SlotOccupied {
            next_match_id: "W-R2-M1".to_string(),
            slot: Slot::One,
        }
    );
    assert_eq!(slot_ids(find(&second.matches, "W-R2-M1")), (Some("p0"), None));
}

#[test]
fn malformed_arguments_are_no_ops() {
    let matches = generate_winners_bracket(&players(4)).unwrap();

    let adv = advance_winner(&matches, "nope", "p0");
    assert_eq!(adv.outcome, AdvanceOutcome::MatchNotFound);
    assert_eq!(adv.matches, matches);

    let adv = advance_winner(&matches, "W-R1-M1", "p3");
    assert_eq!(adv.outcome, AdvanceOutcome::WinnerNotInMatch);
    assert_eq!(adv.matches, matches);

    let adv = advance_winner(&matches, "W-R2-M1", "p0");
    assert_eq!(adv.outcome, AdvanceOutcome::NoSuccessor);
    assert_eq!(adv.matches, matches);
}

#[test]
fn input_snapshot_is_not_mutated() {
    let matches = generate_winners_bracket(&players(4)).unwrap();
    let before = matches.clone();
    let adv = advance_winner(&matches, "W-R1-M1", "p1");
    assert!(adv.outcome.is_advanced());
    assert_eq!(matches, before);
    assert_ne!(adv.matches, before);
}

#[test]
fn ties_are_rejected_before_advancement() {
    let mut matches = generate_winners_bracket(&players(4)).unwrap();
    matches[0].score = Some(Score::new(2, 2));
    matches[0].status = MatchStatus::Completed;

    assert_eq!(
        matches[0].resolve_winner(),
        Err(BracketError::UnresolvedScore("W-R1-M1".to_string()))
    );
    assert!(matches!(
        advance_completed(&matches, "W-R1-M1"),
        Err(BracketError::UnresolvedScore(_))
    ));
    // Bulk advancement skips the tie as well.
    assert_eq!(advance_resolved(&matches), matches);
}

#[test]
fn advance_completed_requires_a_finished_match() {
    let matches = generate_winners_bracket(&players(4)).unwrap();
    assert!(matches!(
        advance_completed(&matches, "W-R1-M2"),
        Err(BracketError::NotCompleted(_))
    ));
    assert!(matches!(
        advance_completed(&matches, "missing"),
        Err(BracketError::MatchNotFound(_))
    ));

    let matches = complete(&matches, "W-R1-M2", 0, 5);
    let adv = advance_completed(&matches, "W-R1-M2").unwrap();
    assert_eq!(slot_ids(find(&adv.matches, "W-R2-M1")), (None, Some("p3")));
}

#[test]
fn record_score_guards() {
    let matches = generate_winners_bracket(&players(4)).unwrap();
    assert!(matches!(
        record_score(&matches, "W-R1-M1", Score::new(1, 1), MatchStatus::Completed),
        Err(BracketError::UnresolvedScore(_))
    ));
    assert!(matches!(
        record_score(&matches, "W-R2-M1", Score::new(1, 0), MatchStatus::InProgress),
        Err(BracketError::EmptySlot(_))
    ));

    // A level score is fine while still being played.
    let live = record_score(&matches, "W-R1-M1", Score::new(1, 1), MatchStatus::InProgress).unwrap();
    assert_eq!(find(&live, "W-R1-M1").status, MatchStatus::InProgress);
    assert!(find(&live, "W-R1-M1").winner().is_none());

    // Once scored, a match is no longer pending.
    let started = record_score(&matches, "W-R1-M2", Score::new(0, 0), MatchStatus::Pending).unwrap();
    assert_eq!(find(&started, "W-R1-M2").status, MatchStatus::InProgress);
    assert_eq!(find(&started, "W-R1-M2").score, Some(Score::new(0, 0)));

    let done = complete(&live, "W-R1-M1", 3, 1);
    assert!(matches!(
        record_score(&done, "W-R1-M1", Score::new(0, 3), MatchStatus::Completed),
        Err(BracketError::MatchAlreadyCompleted(_))
    ));
}

#[test]
fn advance_resolved_cascades_through_rounds() {
    let mut matches = generate_winners_bracket(&players(4)).unwrap();
    matches = complete(&matches, "W-R1-M1", 1, 3);
    matches = complete(&matches, "W-R1-M2", 3, 2);
    let matches = advance_resolved(&matches);
    assert_eq!(slot_ids(find(&matches, "W-R2-M1")), (Some("p1"), Some("p2")));
    assert_eq!(advance_resolved(&matches), matches);
}
