//! swisspair CLI
//!
//! This crate provides the plumbing around the pairing engine:
//! - Command-line and input-file parsing (CSV/JSON)
//! - Output formatting (plain text, Markdown, CSV, JSON)
//! - Config file / environment defaults and a local telemetry log
//!
//! # Usage
//!
//! ```bash
//! # Three rounds for four teams
//! swisspair --teams Alpha Bravo Charlie Delta --num-rounds 3
//!
//! # Squads in brackets keep teammates apart; Markdown output
//! swisspair --teams "Alpha [A]" "Bravo [A]" "Charlie [B]" "Delta [B]" --format markdown
//!
//! # Everything from a file, CLI flags win on conflict
//! swisspair --file tournament.csv --start-round 2
//! ```

mod cli;
mod config;
mod input;
mod output;
mod telemetry;

pub use cli::*;
pub use config::*;
pub use input::*;
pub use output::*;
pub use telemetry::*;
