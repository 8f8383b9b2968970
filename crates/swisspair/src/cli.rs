//! Command-line option parsing and settings resolution.

use std::path::PathBuf;

use pairing_core::{SquadMap, TeamPair};

use crate::config::Config;
use crate::input::FileValues;

/// Roster ordering applied before generation. Order only decides which valid
/// schedule is found first, never whether one is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamOrder {
    #[default]
    TopDown,
    BottomUp,
    Random,
}

impl TeamOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top-down" => Some(Self::TopDown),
            "bottom-up" => Some(Self::BottomUp),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Output format selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Csv,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "markdown" => Some(Self::Markdown),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "json-pretty" => Some(Self::JsonPretty),
            _ => None,
        }
    }
}

/// A team name with an optional squad, as given on the command line or in an
/// input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSpec {
    pub name: String,
    pub squad: Option<String>,
}

impl TeamSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            squad: None,
        }
    }

    pub fn with_squad(name: impl Into<String>, squad: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            squad: Some(squad.into()),
        }
    }
}

/// Parse a `--teams` value. A trailing `[Squad]` places the team in a squad:
/// `"Alpha [A]"` is team `Alpha` in squad `A`.
pub fn parse_team_spec(raw: &str) -> Result<TeamSpec, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("team name must not be empty".to_string());
    }

    if let Some(stripped) = raw.strip_suffix(']') {
        if let Some(open) = stripped.rfind(" [") {
            let name = stripped[..open].trim();
            let squad = stripped[open + 2..].trim();
            if name.is_empty() {
                return Err(format!("missing team name in '{raw}'"));
            }
            if squad.is_empty() {
                return Err(format!("empty squad name in '{raw}'"));
            }
            return Ok(TeamSpec::with_squad(name, squad));
        }
    }

    Ok(TeamSpec::new(raw))
}

/// Parse a `--matches` value of the form `"home,away"`.
pub fn parse_match_spec(raw: &str) -> Result<TeamPair, String> {
    let mut parts = raw.splitn(2, ',');
    let home = parts.next().unwrap_or("").trim();
    let away = parts.next().unwrap_or("").trim();
    if home.is_empty() || away.is_empty() {
        return Err(format!(
            "matches must be given as 'home,away', got '{raw}'"
        ));
    }
    Ok((home.to_string(), away.to_string()))
}

/// Raw command-line options. Fields stay optional so that file values and
/// config defaults can fill whatever the user left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub teams: Vec<TeamSpec>,
    pub num_rounds: Option<u32>,
    pub start_round: Option<u32>,
    pub order: Option<TeamOrder>,
    pub matches: Vec<TeamPair>,
    pub format: Option<OutputFormat>,
    pub file: Option<PathBuf>,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--teams" | "-t" => {
                let values = take_values(&args[i + 1..]);
                if values.is_empty() {
                    return Err("--teams requires at least one team name".to_string());
                }
                i += values.len() + 1;
                for value in values {
                    options.teams.push(parse_team_spec(value)?);
                }
            }
            "--matches" | "-m" => {
                let values = take_values(&args[i + 1..]);
                if values.is_empty() {
                    return Err("--matches requires at least one 'home,away' pair".to_string());
                }
                i += values.len() + 1;
                for value in values {
                    options.matches.push(parse_match_spec(value)?);
                }
            }
            "--num-rounds" | "-n" => {
                options.num_rounds = Some(parse_count(args, i, "--num-rounds")?);
                i += 2;
            }
            "--start-round" | "-s" => {
                options.start_round = Some(parse_count(args, i, "--start-round")?);
                i += 2;
            }
            "--order" | "-o" => {
                let value = flag_value(args, i, "--order")?;
                options.order = Some(
                    TeamOrder::parse(value)
                        .ok_or_else(|| format!("invalid order '{value}' (expected top-down, bottom-up, or random)"))?,
                );
                i += 2;
            }
            "--format" => {
                let value = flag_value(args, i, "--format")?;
                options.format = Some(
                    OutputFormat::parse(value)
                        .ok_or_else(|| format!("invalid format '{value}' (expected text, markdown, csv, json, or json-pretty)"))?,
                );
                i += 2;
            }
            "--file" | "-f" => {
                let value = flag_value(args, i, "--file")?;
                options.file = Some(PathBuf::from(value));
                i += 2;
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
    }

    Ok(options)
}

/// Values following a flag, up to the next flag.
fn take_values(rest: &[String]) -> Vec<&str> {
    rest.iter()
        .map(String::as_str)
        .take_while(|arg| !is_flag(arg))
        .collect()
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with("--") || matches!(arg, "-t" | "-m" | "-n" | "-s" | "-o" | "-f")
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_count(args: &[String], i: usize, flag: &str) -> Result<u32, String> {
    let value = flag_value(args, i, flag)?;
    value
        .parse()
        .map_err(|_| format!("{flag} expects a positive integer, got '{value}'"))
}

// =============================================================================
// Settings resolution — CLI > file > config > built-in default
// =============================================================================

/// Fully resolved settings, ready to turn into a `ScheduleRequest`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub teams: Vec<TeamSpec>,
    pub num_rounds: u32,
    pub start_round: u32,
    pub order: TeamOrder,
    pub matches: Vec<TeamPair>,
    pub format: OutputFormat,
}

impl Settings {
    /// Team names in roster order.
    pub fn team_names(&self) -> Vec<String> {
        self.teams.iter().map(|spec| spec.name.clone()).collect()
    }

    /// Squad assignments for every team that has one.
    pub fn squad_map(&self) -> SquadMap {
        self.teams
            .iter()
            .filter_map(|spec| {
                spec.squad
                    .as_ref()
                    .map(|squad| (spec.name.clone(), squad.clone()))
            })
            .collect()
    }
}

/// Merge explicit CLI options over input-file values over config defaults.
pub fn resolve_settings(
    cli: CliOptions,
    file: Option<FileValues>,
    config: &Config,
) -> Result<Settings, String> {
    let file = file.unwrap_or_default();

    let teams = if cli.teams.is_empty() {
        file.teams
    } else {
        cli.teams
    };
    if teams.is_empty() {
        return Err("no teams given; use --teams or --file".to_string());
    }

    let matches = if cli.matches.is_empty() {
        file.matches
    } else {
        cli.matches
    };

    Ok(Settings {
        teams,
        num_rounds: cli.num_rounds.or(file.num_rounds).unwrap_or(1),
        start_round: cli.start_round.or(file.start_round).unwrap_or(1),
        order: cli.order.or(file.order).unwrap_or_default(),
        matches,
        format: cli
            .format
            .or(file.format)
            .or_else(|| config.default_format())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
