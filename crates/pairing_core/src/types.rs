use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthetic opponent appended to odd-sized rosters. It is paired like any
/// real team and accumulates history, so a team that has had its bye is not
/// handed another one while other teams are still waiting.
pub const BYE: &str = "BYE";

/// An unordered pairing of two distinct teams.
pub type TeamPair = (String, String);

/// Team name to squad name. Two teams sharing a non-empty squad name may
/// never be paired.
pub type SquadMap = BTreeMap<String, String>;

/// One generated round: a label, its number, and the matches in pairing order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub label: String,
    pub number: u32,
    pub matches: Vec<TeamPair>,
}

impl Round {
    pub fn new(number: u32, matches: Vec<TeamPair>) -> Self {
        Self {
            label: format!("Round {number}"),
            number,
            matches,
        }
    }
}

/// Roster copy with a BYE appended when the team count is odd.
pub fn pad_with_bye(teams: &[String]) -> Vec<String> {
    let mut roster = teams.to_vec();
    if roster.len() % 2 != 0 {
        roster.push(BYE.to_string());
    }
    roster
}
