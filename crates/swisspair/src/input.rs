//! Input-file loading: CSV and JSON tournament descriptions.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

use pairing_core::TeamPair;

use crate::cli::{OutputFormat, TeamOrder, TeamSpec};

/// Values read from an input file. Same shape as the CLI options so the two
/// merge field by field, CLI winning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileValues {
    pub teams: Vec<TeamSpec>,
    pub num_rounds: Option<u32>,
    pub start_round: Option<u32>,
    pub order: Option<TeamOrder>,
    pub matches: Vec<TeamPair>,
    pub format: Option<OutputFormat>,
}

/// Load a `.csv` or `.json` input file.
pub fn load_file(path: &Path) -> Result<FileValues> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    debug!(path = %path.display(), kind = %extension, "loading input file");

    match extension.as_str() {
        "csv" => parse_csv(&contents).with_context(|| format!("in {}", path.display())),
        "json" => parse_json(&contents).with_context(|| format!("in {}", path.display())),
        other => bail!("unsupported input file type '.{other}' (expected .csv or .json)"),
    }
}

// =============================================================================
// CSV
// =============================================================================

/// Parse the CSV layout: a header row naming columns, team/squad and
/// match-home/match-away cells read from every data row, scalar settings
/// (num-rounds, start-round, order, format) from the first data row only.
fn parse_csv(contents: &str) -> Result<FileValues> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => line,
        None => bail!("CSV input is empty"),
    };

    let mut columns: BTreeMap<String, usize> = BTreeMap::new();
    for (index, name) in split_csv_line(header).into_iter().enumerate() {
        columns.insert(name.trim().to_ascii_lowercase(), index);
    }
    if !columns.contains_key("teams") {
        bail!("CSV input needs a 'teams' column");
    }

    let cell = |row: &[String], column: &str| -> Option<String> {
        columns
            .get(column)
            .and_then(|&index| row.get(index))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let mut values = FileValues::default();
    let mut first_row = true;

    for line in lines {
        let row = split_csv_line(line);

        if let Some(name) = cell(&row, "teams") {
            values.teams.push(TeamSpec {
                name,
                squad: cell(&row, "squads"),
            });
        }

        match (cell(&row, "matches-home"), cell(&row, "matches-away")) {
            (Some(home), Some(away)) => values.matches.push((home, away)),
            (None, None) => {}
            _ => bail!("CSV row has a half-filled match: {line}"),
        }

        if first_row {
            first_row = false;
            if let Some(raw) = cell(&row, "num-rounds") {
                values.num_rounds = Some(parse_scalar(&raw, "num-rounds")?);
            }
            if let Some(raw) = cell(&row, "start-round") {
                values.start_round = Some(parse_scalar(&raw, "start-round")?);
            }
            if let Some(raw) = cell(&row, "order") {
                values.order = Some(
                    TeamOrder::parse(&raw)
                        .with_context(|| format!("invalid order '{raw}' in CSV"))?,
                );
            }
            if let Some(raw) = cell(&row, "format") {
                values.format = Some(
                    OutputFormat::parse(&raw)
                        .with_context(|| format!("invalid format '{raw}' in CSV"))?,
                );
            }
        }
    }

    Ok(values)
}

fn parse_scalar(raw: &str, column: &str) -> Result<u32> {
    raw.parse()
        .with_context(|| format!("'{column}' must be a positive integer, got '{raw}'"))
}

/// Split one CSV line into cells. Double quotes wrap cells containing commas;
/// a doubled quote inside a quoted cell is a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Debug, Deserialize)]
struct JsonInput {
    #[serde(default)]
    teams: Vec<JsonTeam>,
    #[serde(default, rename = "num-rounds")]
    num_rounds: Option<u32>,
    #[serde(default, rename = "start-round")]
    start_round: Option<u32>,
    #[serde(default)]
    order: Option<String>,
    #[serde(default)]
    matches: Vec<(String, String)>,
    #[serde(default)]
    format: Option<String>,
}

/// Teams appear either as bare names or as `{name, squad}` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTeam {
    Name(String),
    WithSquad { name: String, squad: Option<String> },
}

fn parse_json(contents: &str) -> Result<FileValues> {
    let raw: JsonInput = serde_json::from_str(contents).context("malformed JSON input")?;

    let teams = raw
        .teams
        .into_iter()
        .map(|team| match team {
            JsonTeam::Name(name) => TeamSpec { name, squad: None },
            JsonTeam::WithSquad { name, squad } => TeamSpec { name, squad },
        })
        .collect();

    let order = match raw.order {
        Some(raw_order) => Some(
            TeamOrder::parse(&raw_order)
                .with_context(|| format!("invalid order '{raw_order}' in JSON"))?,
        ),
        None => None,
    };
    let format = match raw.format {
        Some(raw_format) => Some(
            OutputFormat::parse(&raw_format)
                .with_context(|| format!("invalid format '{raw_format}' in JSON"))?,
        ),
        None => None,
    };

    Ok(FileValues {
        teams,
        num_rounds: raw.num_rounds,
        start_round: raw.start_round,
        order,
        matches: raw.matches,
        format,
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
