//! swisspair CLI entry point.
//!
//! Parses flags and optional input files, hands a request to the pairing
//! engine, prints the formatted schedule to stdout. Errors go to stderr with
//! a non-zero exit code.

use std::env;
use std::process::ExitCode;

use rand::seq::SliceRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pairing_core::{generate_schedule, PairingError, ScheduleRequest};
use swisspair::{
    format_rounds, load_file, parse_args, resolve_settings, Config, EventKind, TeamOrder,
    Telemetry,
};

fn print_usage() {
    println!("swisspair - Swiss-style tournament round pairings");
    println!();
    println!("Usage:");
    println!("  swisspair --teams <name>... [options]");
    println!("  swisspair --file <path.csv|path.json> [options]");
    println!();
    println!("Options:");
    println!("  -t, --teams <name>...       Team names; \"Name [Squad]\" assigns a squad");
    println!("  -n, --num-rounds <n>        Rounds to generate (default 1)");
    println!("  -s, --start-round <n>       Number of the first round (default 1)");
    println!("  -m, --matches <a,b>...      Matches already played");
    println!("  -o, --order <order>         top-down | bottom-up | random (default top-down)");
    println!("  -f, --file <path>           Load settings from a CSV or JSON file");
    println!("      --format <format>       text | markdown | csv | json | json-pretty");
    println!("  -h, --help                  Show this help");
    println!();
    println!("Examples:");
    println!("  swisspair --teams Alpha Bravo Charlie Delta --num-rounds 3");
    println!("  swisspair --teams \"Alpha [A]\" \"Bravo [A]\" \"Charlie [B]\" \"Delta [B]\"");
    println!("  swisspair --file tournament.csv --format markdown");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || matches!(args[0].as_str(), "--help" | "-h" | "help") {
        print_usage();
        return if args.is_empty() {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        };
    }

    run(&args)
}

fn run(args: &[String]) -> ExitCode {
    let config = Config::load();
    let telemetry = Telemetry::new(config.telemetry_enabled());

    let options = match parse_args(args) {
        Ok(options) => options,
        Err(message) => return usage_error(&telemetry, &message),
    };

    let file_values = match &options.file {
        Some(path) => match load_file(path) {
            Ok(values) => Some(values),
            Err(error) => return usage_error(&telemetry, &format!("{error:#}")),
        },
        None => None,
    };

    let settings = match resolve_settings(options, file_values, &config) {
        Ok(settings) => settings,
        Err(message) => return usage_error(&telemetry, &message),
    };

    let mut teams = settings.team_names();
    match settings.order {
        TeamOrder::TopDown => {}
        TeamOrder::BottomUp => teams.reverse(),
        TeamOrder::Random => teams.shuffle(&mut rand::thread_rng()),
    }

    info!(
        teams = teams.len(),
        rounds = settings.num_rounds,
        start = settings.start_round,
        "generating schedule"
    );

    let request = ScheduleRequest {
        teams,
        num_rounds: settings.num_rounds,
        start_round: settings.start_round,
        played_matches: settings.matches.clone(),
        squads: settings.squad_map(),
    };

    match generate_schedule(&request) {
        Ok(rounds) => {
            let rendered = match format_rounds(&rounds, settings.format) {
                Ok(rendered) => rendered,
                Err(error) => {
                    eprintln!("Error: {error:#}");
                    telemetry.record(EventKind::GenerateFailed, request.teams.len(), request.num_rounds);
                    return ExitCode::from(1);
                }
            };
            println!("{rendered}");
            telemetry.record(
                EventKind::GenerateSucceeded,
                request.teams.len(),
                request.num_rounds,
            );
            ExitCode::SUCCESS
        }
        Err(error @ PairingError::InvalidInput(_)) => {
            eprintln!("Error: {error}");
            telemetry.record(EventKind::InvalidInput, request.teams.len(), request.num_rounds);
            ExitCode::from(1)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            telemetry.record(EventKind::GenerateFailed, request.teams.len(), request.num_rounds);
            ExitCode::from(1)
        }
    }
}

fn usage_error(telemetry: &Telemetry, message: &str) -> ExitCode {
    eprintln!("Error: {message}");
    eprintln!("Run 'swisspair --help' for usage.");
    telemetry.record(EventKind::UsageError, 0, 0);
    ExitCode::from(1)
}
