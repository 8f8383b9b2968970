//! Precondition checks run before any pairing search.

use std::collections::BTreeSet;

use crate::error::PairingError;
use crate::history::MatchHistory;
use crate::types::SquadMap;

/// Validate a round-generation request.
///
/// Checks run in a fixed order and the first failure wins, so the reported
/// message is deterministic for a given input. The roster is expected to be
/// final here: odd counts are rejected, BYE padding is the caller's job.
pub fn validate_generation_input(
    teams: &[String],
    num_rounds: u32,
    history: &MatchHistory,
    squads: &SquadMap,
) -> Result<(), PairingError> {
    if teams.len() < 2 {
        return fail("there must be at least two teams");
    }
    if teams.len() % 2 != 0 {
        return fail("there must be an even number of teams");
    }

    let mut roster = BTreeSet::new();
    for team in teams {
        if !roster.insert(team.as_str()) {
            return fail(format!("duplicate team name: {team}"));
        }
    }

    if num_rounds < 1 {
        return fail("number of rounds must be at least 1");
    }
    if num_rounds as usize >= teams.len() {
        return fail(format!(
            "number of rounds must be less than the number of teams ({})",
            teams.len()
        ));
    }

    // Every name mentioned by the history must be on the roster.
    for (team, opponents) in history.entries() {
        if !roster.contains(team.as_str()) {
            return fail(format!("unknown team in matches: {team}"));
        }
        for opponent in opponents {
            if !roster.contains(opponent.as_str()) {
                return fail(format!("unknown team in matches: {opponent}"));
            }
        }
    }

    for (team, opponents) in history.entries() {
        if opponents.contains(team) {
            return fail(format!("match history lists {team} as playing itself"));
        }
    }

    for (team, opponents) in history.entries() {
        for opponent in opponents {
            if !history.have_played(opponent, team) {
                return fail(format!(
                    "match history is not symmetric: {team} lists {opponent} but not the reverse"
                ));
            }
        }
    }

    for team in squads.keys() {
        if !roster.contains(team.as_str()) {
            return fail(format!("unknown team in squad assignments: {team}"));
        }
    }

    Ok(())
}

fn fail(message: impl Into<String>) -> Result<(), PairingError> {
    Err(PairingError::invalid_input(message))
}

#[cfg(test)]
#[path = "validate_input_tests.rs"]
mod validate_input_tests;
