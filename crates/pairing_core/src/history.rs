//! Symmetric opponent-history tracking.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::TeamPair;

/// Which opponents each team has already faced.
///
/// The relation is kept symmetric: recording `a vs b` stores the opponent
/// under both keys. Ordered containers keep iteration, and therefore any
/// message derived from it, deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchHistory {
    played: BTreeMap<String, BTreeSet<String>>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an externally built team → opponents map as-is.
    ///
    /// No symmetry is enforced here; the input validator reports asymmetric
    /// entries with a usable message instead of silently repairing them.
    pub fn from_map(played: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { played }
    }

    /// Build a history from prior match pairs. Empty input gives an empty map.
    pub fn from_pairs(pairs: &[TeamPair]) -> Self {
        let mut history = Self::new();
        for (a, b) in pairs {
            history.record(a, b);
        }
        history
    }

    /// Record that `a` and `b` have faced each other, in both directions.
    pub fn record(&mut self, a: &str, b: &str) {
        self.played
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.played
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    pub fn have_played(&self, a: &str, b: &str) -> bool {
        self.played.get(a).is_some_and(|opps| opps.contains(b))
    }

    /// Opponents already faced by `team`, if it appears in the history.
    pub fn opponents(&self, team: &str) -> Option<&BTreeSet<String>> {
        self.played.get(team)
    }

    /// All (team, opponents) entries in team-name order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.played.iter()
    }

    /// A copy of this history with `pairs` folded in symmetrically. The
    /// original is left untouched.
    pub fn merged_with(&self, pairs: &[TeamPair]) -> Self {
        let mut merged = self.clone();
        for (a, b) in pairs {
            merged.record(a, b);
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
