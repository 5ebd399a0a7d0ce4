//! Integration tests for cross-bracket population, semi-final readiness and final results.

use billiards_bracket::{
    advance_resolved, can_start_semi_final, generate_losers_bracket, generate_semi_final_stage,
    generate_winners_bracket, get_tournament_results, populate_losers_from_winners,
    populate_semi_final_from_brackets, record_score, GameMatch, MatchStatus, Player, Score,
    TournamentResults,
};

fn players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{i}"), format!("Player {i}")).unwrap())
        .collect()
}

/// Complete every playable match whose id starts with `prefix`, then advance.
fn play(matches: &[GameMatch], prefix: &str, p1: u32, p2: u32) -> Vec<GameMatch> {
    let ids: Vec<String> = matches
        .iter()
        .filter(|m| m.id.starts_with(prefix) && m.has_both_players() && !m.is_completed())
        .map(|m| m.id.clone())
        .collect();
    let mut next = matches.to_vec();
    for id in ids {
        next = record_score(&next, &id, Score::new(p1, p2), MatchStatus::Completed).unwrap();
    }
    advance_resolved(&next)
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

fn ids(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.id.as_str()).collect()
}

/// Winners through the semi-finals, both losers branches decided.
/// Winners semi-finals go to p0 and p8, branch A to p9, branch B to p2.
fn brackets_ready_for_semis() -> (Vec<GameMatch>, Vec<GameMatch>) {
    let mut winners = generate_winners_bracket(&players(16)).unwrap();
    for round in ["W-R1", "W-R2", "W-R3"] {
        winners = play(&winners, round, 2, 0);
    }
    let mut losers = populate_losers_from_winners(&winners, &generate_losers_bracket());
    losers = play(&losers, "LA-R1", 2, 0);
    losers = play(&losers, "LA-R2", 2, 0);
    losers = play(&losers, "LA-R3", 0, 2);
    losers = play(&losers, "LB-R1", 2, 0);
    losers = play(&losers, "LB-R2", 2, 0);
    (winners, losers)
}

#[test]
fn round_one_losers_fill_branch_a_in_source_order() {
    let winners = play(&generate_winners_bracket(&players(16)).unwrap(), "W-R1", 2, 0);
    let losers = populate_losers_from_winners(&winners, &generate_losers_bracket());

    let expected = [("p1", "p3"), ("p5", "p7"), ("p9", "p11"), ("p13", "p15")];
    for (i, (a, b)) in expected.into_iter().enumerate() {
        let m = find(&losers, &format!("LA-R1-M{}", i + 1));
        assert_eq!(slot_ids(m), (Some(a), Some(b)));
    }
    // Winners round 2 not played yet: branch B stays empty.
    for id in ["LB-R1-M1", "LB-R1-M2"] {
        assert_eq!(slot_ids(find(&losers, id)), (None, None));
    }
}

#[test]
fn round_two_losers_fill_branch_b() {
    let mut winners = generate_winners_bracket(&players(16)).unwrap();
    winners = play(&winners, "W-R1", 2, 0);
    winners = play(&winners, "W-R2", 0, 1);
    let losers = populate_losers_from_winners(&winners, &generate_losers_bracket());
    // Round 2 is (p0,p2) (p4,p6) (p8,p10) (p12,p14); player two wins each.
    assert_eq!(slot_ids(find(&losers, "LB-R1-M1")), (Some("p0"), Some("p4")));
    assert_eq!(slot_ids(find(&losers, "LB-R1-M2")), (Some("p8"), Some("p12")));
}

#[test]
fn populate_losers_is_idempotent_and_never_overwrites() {
    let winners = play(&generate_winners_bracket(&players(16)).unwrap(), "W-R1", 2, 0);
    let mut losers = generate_losers_bracket();
    losers[0].player1 = Some(Player::new("walk-in", "Walk In").unwrap());

    let once = populate_losers_from_winners(&winners, &losers);
    let twice = populate_losers_from_winners(&winners, &once);
    assert_eq!(once, twice);
    assert_eq!(slot_ids(find(&once, "LA-R1-M1")), (Some("walk-in"), Some("p3")));
}

#[test]
fn tied_source_match_is_skipped() {
    let mut winners = play(&generate_winners_bracket(&players(16)).unwrap(), "W-R1-M2", 2, 0);
    winners[0].score = Some(Score::new(1, 1));
    winners[0].status = MatchStatus::Completed;

    let losers = populate_losers_from_winners(&winners, &generate_losers_bracket());
    assert_eq!(slot_ids(find(&losers, "LA-R1-M1")), (None, Some("p3")));
}

#[test]
fn semi_final_readiness_needs_all_four_prerequisites() {
    let (winners, losers) = brackets_ready_for_semis();
    assert!(can_start_semi_final(&winners, &losers));

    assert!(!can_start_semi_final(
        &generate_winners_bracket(&players(16)).unwrap(),
        &generate_losers_bracket()
    ));

    for id in ["W-R3-M1", "W-R3-M2"] {
        let mut w = winners.clone();
        w.iter_mut().find(|m| m.id == id).unwrap().status = MatchStatus::InProgress;
        assert!(!can_start_semi_final(&w, &losers), "{id} reopened");
    }
    for id in ["LA-R3-M1", "LB-R2-M1"] {
        let mut l = losers.clone();
        l.iter_mut().find(|m| m.id == id).unwrap().status = MatchStatus::InProgress;
        assert!(!can_start_semi_final(&winners, &l), "{id} reopened");
    }

    // Completed but tied does not count.
    let mut l = losers.clone();
    l.iter_mut().find(|m| m.id == "LB-R2-M1").unwrap().score = Some(Score::new(3, 3));
    assert!(!can_start_semi_final(&winners, &l));
}

#[test]
fn semi_finals_take_winners_semifinalists_and_branch_champions() {
    let (winners, losers) = brackets_ready_for_semis();
    let semis = populate_semi_final_from_brackets(&winners, &losers, &generate_semi_final_stage());
    assert_eq!(slot_ids(find(&semis, "SF-1")), (Some("p0"), Some("p9")));
    assert_eq!(slot_ids(find(&semis, "SF-2")), (Some("p8"), Some("p2")));
    assert_eq!(slot_ids(find(&semis, "F")), (None, None));

    let again = populate_semi_final_from_brackets(&winners, &losers, &semis);
    assert_eq!(again, semis);
}

#[test]
fn partial_semi_final_population() {
    let (winners, _) = brackets_ready_for_semis();
    let semis = populate_semi_final_from_brackets(
        &winners,
        &generate_losers_bracket(),
        &generate_semi_final_stage(),
    );
    assert_eq!(slot_ids(find(&semis, "SF-1")), (Some("p0"), None));
    assert_eq!(slot_ids(find(&semis, "SF-2")), (Some("p8"), None));
}

#[test]
fn results_after_final() {
    let (winners, losers) = brackets_ready_for_semis();
    let mut semis = populate_semi_final_from_brackets(&winners, &losers, &generate_semi_final_stage());
    semis = record_score(&semis, "SF-1", Score::new(2, 0), MatchStatus::Completed).unwrap();
    semis = record_score(&semis, "SF-2", Score::new(1, 2), MatchStatus::Completed).unwrap();
    semis = advance_resolved(&semis);
    assert_eq!(slot_ids(find(&semis, "F")), (Some("p0"), Some("p2")));

    let before_final = get_tournament_results(&semis);
    assert!(!before_final.is_finished());
    assert_eq!(ids(&before_final.third_place), vec!["p9", "p8"]);

    semis = record_score(&semis, "F", Score::new(0, 3), MatchStatus::Completed).unwrap();
    let results = get_tournament_results(&semis);
    assert_eq!(results.champion.unwrap().id, "p2");
    assert_eq!(results.runner_up.unwrap().id, "p0");
    assert_eq!(ids(&results.third_place), vec!["p9", "p8"]);
}

#[test]
fn results_before_any_play_are_empty() {
    let results = get_tournament_results(&generate_semi_final_stage());
    assert_eq!(results, TournamentResults::default());
    assert_eq!(serde_json::to_string(&results).unwrap(), "{}");
}
