//! Swiss pairing engine.
//!
//! Generates multi-round pairing schedules for a fixed roster: no pair plays
//! twice, optional squad exclusivity, history threaded from round to round.
//! Pure and synchronous; all I/O, parsing, and formatting live in the CLI
//! crate.

pub mod error;
pub mod history;
pub mod matcher;
pub mod rounds;
pub mod types;
pub mod validate_input;
pub mod validate_output;

pub use error::PairingError;
pub use history::MatchHistory;
pub use matcher::pair_round;
pub use rounds::generate_rounds;
pub use types::{pad_with_bye, Round, SquadMap, TeamPair, BYE};
pub use validate_input::validate_generation_input;
pub use validate_output::validate_generated_rounds;

// =============================================================================
// Pipeline entry point — validate, generate, re-validate
// =============================================================================

/// A complete round-generation request, as assembled by a caller such as the
/// CLI after its own parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Roster in pairing order. Order decides which valid schedule is found.
    pub teams: Vec<String>,
    /// How many rounds to generate.
    pub num_rounds: u32,
    /// Number given to the first generated round.
    pub start_round: u32,
    /// Matches already played before this invocation.
    pub played_matches: Vec<TeamPair>,
    /// Optional squad assignments; same-squad teams are never paired.
    pub squads: SquadMap,
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            num_rounds: 1,
            start_round: 1,
            played_matches: Vec::new(),
            squads: SquadMap::new(),
        }
    }
}

/// Run the whole pipeline for one request.
///
/// Rosters with an odd count get a synthetic [`BYE`] entry before anything
/// else looks at them; a roster smaller than two teams is rejected outright
/// rather than padded. The produced schedule is checked against every
/// invariant before it is returned, so an [`PairingError::InvalidOutput`]
/// here means the generator itself misbehaved.
pub fn generate_schedule(request: &ScheduleRequest) -> Result<Vec<Round>, PairingError> {
    if request.teams.len() < 2 {
        return Err(PairingError::invalid_input("there must be at least two teams"));
    }

    let roster = pad_with_bye(&request.teams);
    let history = MatchHistory::from_pairs(&request.played_matches);

    validate_generation_input(&roster, request.num_rounds, &history, &request.squads)?;

    let rounds = generate_rounds(
        &roster,
        request.num_rounds,
        request.start_round,
        &history,
        &request.squads,
    )?;

    validate_generated_rounds(
        &rounds,
        &roster,
        request.num_rounds,
        request.start_round,
        &history,
        &request.squads,
    )?;

    Ok(rounds)
}
