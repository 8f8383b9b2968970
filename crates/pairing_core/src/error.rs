//! Error taxonomy for pairing generation.

use thiserror::Error;

/// Failures surfaced by the pairing engine.
///
/// All three are expected, reportable outcomes returned as values; nothing in
/// the engine panics for control flow. The CLI layer maps them to stderr text
/// and a non-zero exit code.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    /// A precondition failed before any search ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backtracking search exhausted every option for one round.
    #[error("no valid pairings possible for {round}")]
    NoValidPairings { round: String },

    /// A generated schedule violated an invariant. This points at a bug in
    /// the generator itself, not at the caller's input.
    #[error("invalid output: {0}")]
    InvalidOutput(String),
}

impl PairingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }
}
