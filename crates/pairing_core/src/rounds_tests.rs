use super::*;

fn teams(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<crate::types::TeamPair> {
    expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_three_rounds_for_four_fresh_teams() {
    let rounds = generate_rounds(
        &teams(&["p1", "p2", "p3", "p4"]),
        3,
        1,
        &MatchHistory::new(),
        &SquadMap::new(),
    )
    .expect("three rounds for four teams");

    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].matches, pairs(&[("p1", "p2"), ("p3", "p4")]));
    assert_eq!(rounds[1].matches, pairs(&[("p1", "p3"), ("p2", "p4")]));
    assert_eq!(rounds[2].matches, pairs(&[("p1", "p4"), ("p2", "p3")]));
}

#[test]
fn test_round_numbers_follow_start_round() {
    let rounds = generate_rounds(
        &teams(&["p1", "p2", "p3", "p4"]),
        2,
        3,
        &MatchHistory::new(),
        &SquadMap::new(),
    )
    .expect("two rounds from round 3");

    assert_eq!(rounds[0].number, 3);
    assert_eq!(rounds[0].label, "Round 3");
    assert_eq!(rounds[1].number, 4);
    assert_eq!(rounds[1].label, "Round 4");
}

#[test]
fn test_failure_names_the_exhausted_round() {
    // p1 has already played everyone, so round 1 cannot be paired.
    let history = MatchHistory::from_pairs(&pairs(&[("p1", "p2"), ("p1", "p3"), ("p1", "p4")]));

    let result = generate_rounds(
        &teams(&["p1", "p2", "p3", "p4"]),
        1,
        1,
        &history,
        &SquadMap::new(),
    );
    assert_eq!(
        result,
        Err(PairingError::NoValidPairings {
            round: "Round 1".to_string()
        })
    );
}

#[test]
fn test_failure_in_a_later_round_is_reported_for_that_round() {
    // Only p1 vs p2 and p3 vs p4 remain legal, which is exactly one round's
    // worth of matches. Round 2 must then fail.
    let history = MatchHistory::from_pairs(&pairs(&[
        ("p1", "p3"),
        ("p1", "p4"),
        ("p2", "p3"),
        ("p2", "p4"),
    ]));

    let result = generate_rounds(
        &teams(&["p1", "p2", "p3", "p4"]),
        2,
        1,
        &history,
        &SquadMap::new(),
    );
    assert_eq!(
        result,
        Err(PairingError::NoValidPairings {
            round: "Round 2".to_string()
        })
    );
}

#[test]
fn test_caller_history_is_not_mutated() {
    let history = MatchHistory::new();
    generate_rounds(
        &teams(&["p1", "p2", "p3", "p4"]),
        3,
        1,
        &history,
        &SquadMap::new(),
    )
    .expect("schedule should generate");

    assert!(history.is_empty());
}

#[test]
fn test_no_match_repeats_across_rounds() {
    let roster = teams(&["p1", "p2", "p3", "p4", "p5", "p6"]);
    let rounds = generate_rounds(&roster, 5, 1, &MatchHistory::new(), &SquadMap::new())
        .expect("full round robin for six teams");

    let mut seen = MatchHistory::new();
    for round in &rounds {
        for (home, away) in &round.matches {
            assert!(
                !seen.have_played(home, away),
                "{home} vs {away} repeated in {}",
                round.label
            );
            seen.record(home, away);
        }
    }
}
