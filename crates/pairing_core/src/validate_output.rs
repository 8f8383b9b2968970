//! Post-generation invariant checks over a produced schedule.
//!
//! Everything here is re-derived from scratch: the played-set bookkeeping is
//! rebuilt independently of the matcher and the input validator, so a
//! regression in the generator cannot hide behind shared logic.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::PairingError;
use crate::history::MatchHistory;
use crate::types::{Round, SquadMap};

/// Check that a produced schedule satisfies every pairing invariant.
///
/// Rounds are scanned in order and matches within a round in list order; the
/// first violation found is the one reported, so messages are deterministic.
/// Each checked match is folded into a working played-set before the next is
/// examined, mirroring how the generator threads history forward.
pub fn validate_generated_rounds(
    rounds: &[Round],
    teams: &[String],
    num_rounds: u32,
    start_round: u32,
    history: &MatchHistory,
    squads: &SquadMap,
) -> Result<(), PairingError> {
    if rounds.len() != num_rounds as usize {
        return fail(format!(
            "expected {num_rounds} rounds but found {}",
            rounds.len()
        ));
    }

    let expected_matches = teams.len() / 2;

    let mut played: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (team, opponents) in history.entries() {
        played.insert(
            team.as_str(),
            opponents.iter().map(String::as_str).collect(),
        );
    }

    for (offset, round) in rounds.iter().enumerate() {
        let expected_number = start_round + offset as u32;
        if round.number != expected_number {
            return fail(format!(
                "Round {} has incorrect number {} (should be {})",
                offset + 1,
                round.number,
                expected_number
            ));
        }

        if round.matches.len() != expected_matches {
            return fail(format!(
                "{} has {} matches (expected {})",
                round.label,
                round.matches.len(),
                expected_matches
            ));
        }

        let mut scheduled: BTreeSet<&str> = BTreeSet::new();
        for (home, away) in &round.matches {
            if home == away {
                return fail(format!("{home} is matched against itself in {}", round.label));
            }

            if played
                .get(home.as_str())
                .is_some_and(|opponents| opponents.contains(away.as_str()))
            {
                return fail(format!("Duplicate match found: {home} vs {away}"));
            }

            if scheduled.contains(home.as_str()) || scheduled.contains(away.as_str()) {
                return fail(format!(
                    "Teams {home} or {away} are scheduled multiple times in {}",
                    round.label
                ));
            }

            if let (Some(home_squad), Some(away_squad)) =
                (squads.get(home.as_str()), squads.get(away.as_str()))
            {
                if !home_squad.is_empty() && home_squad == away_squad {
                    return fail(format!(
                        "Teams {home} and {away} cannot play each other - they are in the same squad"
                    ));
                }
            }

            scheduled.insert(home.as_str());
            scheduled.insert(away.as_str());
            played.entry(home.as_str()).or_default().insert(away.as_str());
            played.entry(away.as_str()).or_default().insert(home.as_str());
        }
    }

    Ok(())
}

fn fail(message: impl Into<String>) -> Result<(), PairingError> {
    Err(PairingError::invalid_output(message))
}

#[cfg(test)]
#[path = "validate_output_tests.rs"]
mod validate_output_tests;
