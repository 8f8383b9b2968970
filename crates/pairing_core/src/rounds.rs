//! Multi-round schedule generation.

use crate::error::PairingError;
use crate::history::MatchHistory;
use crate::matcher::pair_round;
use crate::types::{Round, SquadMap};

/// Generate `num_rounds` consecutive rounds numbered from `start_round`.
///
/// The caller's history is cloned; each generated round is folded into the
/// working copy before the next round is paired, so no pairing repeats a
/// match from the input history or from an earlier round. The roster itself
/// is static across rounds.
///
/// Fails with [`PairingError::NoValidPairings`] naming the first round for
/// which no pairing exists. No partial schedule is returned.
pub fn generate_rounds(
    teams: &[String],
    num_rounds: u32,
    start_round: u32,
    history: &MatchHistory,
    squads: &SquadMap,
) -> Result<Vec<Round>, PairingError> {
    let mut working = history.clone();
    let mut rounds = Vec::with_capacity(num_rounds as usize);

    for offset in 0..num_rounds {
        let number = start_round + offset;
        let matches =
            pair_round(teams, &working, squads).ok_or_else(|| PairingError::NoValidPairings {
                round: format!("Round {number}"),
            })?;
        working = working.merged_with(&matches);
        rounds.push(Round::new(number, matches));
    }

    Ok(rounds)
}

#[cfg(test)]
#[path = "rounds_tests.rs"]
mod rounds_tests;
