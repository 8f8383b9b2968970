use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_parse_team_spec_plain_name() {
    assert_eq!(parse_team_spec("Alpha"), Ok(TeamSpec::new("Alpha")));
}

#[test]
fn test_parse_team_spec_with_squad() {
    assert_eq!(
        parse_team_spec("Alpha [A]"),
        Ok(TeamSpec::with_squad("Alpha", "A"))
    );
}

#[test]
fn test_parse_team_spec_squad_with_spaces() {
    assert_eq!(
        parse_team_spec("Red Dragons [North Squad]"),
        Ok(TeamSpec::with_squad("Red Dragons", "North Squad"))
    );
}

#[test]
fn test_parse_team_spec_rejects_empty_name_and_squad() {
    assert!(parse_team_spec("").is_err());
    assert!(parse_team_spec("Alpha [ ]").is_err());
}

#[test]
fn test_parse_match_spec() {
    assert_eq!(
        parse_match_spec("Alpha,Bravo"),
        Ok(("Alpha".to_string(), "Bravo".to_string()))
    );
    assert!(parse_match_spec("Alpha").is_err());
    assert!(parse_match_spec(",Bravo").is_err());
}

#[test]
fn test_parse_args_full_invocation() {
    let options = parse_args(&args(&[
        "--teams",
        "Alpha [A]",
        "Bravo [A]",
        "Charlie",
        "Delta",
        "--num-rounds",
        "3",
        "--start-round",
        "2",
        "--order",
        "bottom-up",
        "--matches",
        "Alpha,Charlie",
        "--format",
        "markdown",
    ]))
    .expect("valid arguments");

    assert_eq!(options.teams.len(), 4);
    assert_eq!(options.teams[0], TeamSpec::with_squad("Alpha", "A"));
    assert_eq!(options.teams[2], TeamSpec::new("Charlie"));
    assert_eq!(options.num_rounds, Some(3));
    assert_eq!(options.start_round, Some(2));
    assert_eq!(options.order, Some(TeamOrder::BottomUp));
    assert_eq!(
        options.matches,
        vec![("Alpha".to_string(), "Charlie".to_string())]
    );
    assert_eq!(options.format, Some(OutputFormat::Markdown));
}

#[test]
fn test_parse_args_short_flags() {
    let options = parse_args(&args(&["-t", "Alpha", "Bravo", "-n", "2"]))
        .expect("short flags parse");
    assert_eq!(options.teams.len(), 2);
    assert_eq!(options.num_rounds, Some(2));
}

#[test]
fn test_parse_args_rejects_unknown_flag() {
    let result = parse_args(&args(&["--bogus"]));
    assert_eq!(result, Err("unknown argument: --bogus".to_string()));
}

#[test]
fn test_parse_args_rejects_missing_value() {
    assert!(parse_args(&args(&["--teams"])).is_err());
    assert!(parse_args(&args(&["--num-rounds"])).is_err());
}

#[test]
fn test_parse_args_rejects_bad_number() {
    let result = parse_args(&args(&["--num-rounds", "three"]));
    assert!(result.unwrap_err().contains("positive integer"));
}

#[test]
fn test_parse_args_rejects_bad_order() {
    let result = parse_args(&args(&["--order", "sideways"]));
    assert!(result.unwrap_err().contains("invalid order"));
}

#[test]
fn test_resolve_settings_applies_defaults() {
    let cli = CliOptions {
        teams: vec![TeamSpec::new("Alpha"), TeamSpec::new("Bravo")],
        ..Default::default()
    };
    let settings =
        resolve_settings(cli, None, &Config::default()).expect("defaults resolve");

    assert_eq!(settings.num_rounds, 1);
    assert_eq!(settings.start_round, 1);
    assert_eq!(settings.order, TeamOrder::TopDown);
    assert_eq!(settings.format, OutputFormat::Text);
    assert!(settings.matches.is_empty());
}

#[test]
fn test_resolve_settings_cli_beats_file() {
    let cli = CliOptions {
        num_rounds: Some(5),
        ..Default::default()
    };
    let file = FileValues {
        teams: vec![TeamSpec::new("Alpha"), TeamSpec::new("Bravo")],
        num_rounds: Some(2),
        format: Some(OutputFormat::Csv),
        ..Default::default()
    };

    let settings =
        resolve_settings(cli, Some(file), &Config::default()).expect("merge resolves");

    // CLI round count wins; file supplies teams and format.
    assert_eq!(settings.num_rounds, 5);
    assert_eq!(settings.teams.len(), 2);
    assert_eq!(settings.format, OutputFormat::Csv);
}

#[test]
fn test_resolve_settings_requires_teams() {
    let result = resolve_settings(CliOptions::default(), None, &Config::default());
    assert_eq!(
        result,
        Err("no teams given; use --teams or --file".to_string())
    );
}

#[test]
fn test_settings_squad_map_skips_unassigned_teams() {
    let settings = Settings {
        teams: vec![
            TeamSpec::with_squad("Alpha", "A"),
            TeamSpec::new("Bravo"),
        ],
        num_rounds: 1,
        start_round: 1,
        order: TeamOrder::TopDown,
        matches: Vec::new(),
        format: OutputFormat::Text,
    };

    let squads = settings.squad_map();
    assert_eq!(squads.get("Alpha").map(String::as_str), Some("A"));
    assert!(!squads.contains_key("Bravo"));
}
