//! Schedule formatters.

use anyhow::{Context, Result};

use pairing_core::Round;

use crate::cli::OutputFormat;

/// Render a schedule in the requested format.
pub fn format_rounds(rounds: &[Round], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(rounds)),
        OutputFormat::Markdown => Ok(format_markdown(rounds)),
        OutputFormat::Csv => Ok(format_csv(rounds)),
        OutputFormat::Json => {
            serde_json::to_string(rounds).context("failed to serialize schedule")
        }
        OutputFormat::JsonPretty => {
            serde_json::to_string_pretty(rounds).context("failed to serialize schedule")
        }
    }
}

fn format_text(rounds: &[Round]) -> String {
    let mut out = String::new();
    for (index, round) in rounds.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}:\n", round.label));
        for (home, away) in &round.matches {
            out.push_str(&format!("  {home} vs {away}\n"));
        }
    }
    out
}

fn format_markdown(rounds: &[Round]) -> String {
    let mut out = String::from("# Matches\n");
    for round in rounds {
        out.push_str(&format!("\n**{}**\n\n", round.label));
        for (index, (home, away)) in round.matches.iter().enumerate() {
            out.push_str(&format!("{}. {home} vs {away}\n", index + 1));
        }
    }
    out
}

fn format_csv(rounds: &[Round]) -> String {
    let mut out = String::from("round,match,home-team,away-team\n");
    for round in rounds {
        for (index, (home, away)) in round.matches.iter().enumerate() {
            out.push_str(&format!(
                "{},{},{},{}\n",
                round.number,
                index + 1,
                csv_field(home),
                csv_field(away)
            ));
        }
    }
    out
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
