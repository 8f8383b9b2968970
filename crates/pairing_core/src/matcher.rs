//! Single-round pairing search.

use crate::history::MatchHistory;
use crate::types::{SquadMap, TeamPair};

/// Find one complete pairing for a round, or report that none exists.
///
/// Recursive backtracking: the first team in `teams` is paired with the
/// earliest legal candidate whose remaining teams can themselves be paired.
/// A candidate is illegal if the two have already played or share a non-empty
/// squad. The first complete pairing found wins, so the result is
/// deterministic for a fixed team order; earlier teams tend to be paired
/// with nearby survivors.
///
/// `None` is not an error. It means no perfect matching exists under the
/// current history and squad constraints, and the caller decides how to
/// report that.
pub fn pair_round(
    teams: &[String],
    history: &MatchHistory,
    squads: &SquadMap,
) -> Option<Vec<TeamPair>> {
    let (current, rest) = match teams.split_first() {
        Some(split) => split,
        None => return Some(Vec::new()),
    };

    for (index, candidate) in rest.iter().enumerate() {
        if history.have_played(current, candidate) {
            continue;
        }
        if in_same_squad(squads, current, candidate) {
            continue;
        }

        let remaining: Vec<String> = rest
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(_, team)| team.clone())
            .collect();

        if let Some(rest_matches) = pair_round(&remaining, history, squads) {
            let mut matches = Vec::with_capacity(rest_matches.len() + 1);
            matches.push((current.clone(), candidate.clone()));
            matches.extend(rest_matches);
            return Some(matches);
        }
    }

    None
}

fn in_same_squad(squads: &SquadMap, a: &str, b: &str) -> bool {
    match (squads.get(a), squads.get(b)) {
        (Some(squad_a), Some(squad_b)) => !squad_a.is_empty() && squad_a == squad_b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
