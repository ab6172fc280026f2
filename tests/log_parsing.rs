use quake_log_parser::{
    create_json_file, parse_file, process_files_in_parallel, write_json, ErrorPolicy, LineKind,
    MeansOfDeath, QuakeLogError,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn single_game_matches_golden_output() {
    let report = parse_file(&fixture("single_game.log"), ErrorPolicy::FailFast).unwrap();
    assert_eq!(report.matches.len(), 1);

    let mut out = Vec::new();
    write_json(&mut out, std::slice::from_ref(&report)).unwrap();
    let expected = fs::read_to_string(fixture("single_game.json")).unwrap();

    let got: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let want: serde_json::Value = serde_json::from_str(&expected).unwrap();
    assert_eq!(got, want);
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn single_game_totals_are_consistent() {
    let report = parse_file(&fixture("single_game.log"), ErrorPolicy::FailFast).unwrap();
    let record = &report.matches[0];

    let by_means: u32 = record.kills_by_means.values().sum();
    assert_eq!(by_means, record.total_kills);

    let nonzero: Vec<MeansOfDeath> = record
        .kills_by_means
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(means, _)| *means)
        .collect();
    assert_eq!(
        nonzero,
        vec![
            MeansOfDeath::Rocket,
            MeansOfDeath::RocketSplash,
            MeansOfDeath::Railgun,
            MeansOfDeath::Falling,
            MeansOfDeath::TriggerHurt,
        ]
    );
}

#[test]
fn games_are_split_on_init_game() {
    let report = parse_file(&fixture("two_games.log"), ErrorPolicy::FailFast).unwrap();
    assert_eq!(report.matches.len(), 2);

    let first = &report.matches[0];
    assert_eq!(first.total_kills, 0);
    assert_eq!(first.players, vec!["Isgalamido"]);
    assert!(first.ranking.is_empty());

    let second = &report.matches[1];
    assert_eq!(second.total_kills, 4);
    assert_eq!(second.players, vec!["Isgalamido", "Dono da Bola"]);
    assert_eq!(second.kills["Isgalamido"], 2);
    assert_eq!(second.kills["Dono da Bola"], 0);
    assert_eq!(second.ranking, vec!["Isgalamido", "Dono da Bola"]);
    assert_eq!(second.kills_by_means[&MeansOfDeath::RocketSplash], 3);
    assert_eq!(second.kills_by_means[&MeansOfDeath::TriggerHurt], 1);
}

#[test]
fn malformed_kill_line_fails_the_run() {
    let err = parse_file(&fixture("invalid.log"), ErrorPolicy::FailFast).unwrap_err();

    match err {
        QuakeLogError::MalformedEventLine {
            line_number, kind, ..
        } => {
            assert_eq!(line_number, 3);
            assert_eq!(kind, LineKind::Kill);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_kill_line_is_collected_when_keeping_going() {
    let report = parse_file(&fixture("invalid.log"), ErrorPolicy::Collect).unwrap();

    assert_eq!(report.rejected_lines.len(), 1);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].total_kills, 0);
    assert_eq!(report.matches[0].players, vec!["Isgalamido"]);
}

#[test]
fn missing_file_fails_without_partial_result() {
    let err = parse_file(&fixture("no_such_file.log"), ErrorPolicy::Collect).unwrap_err();
    assert!(matches!(err, QuakeLogError::InputUnavailable { .. }));
}

#[test]
fn parallel_run_keeps_input_order() {
    let mut extra = tempfile::NamedTempFile::new().unwrap();
    writeln!(extra, "  0:00 InitGame: \\mapname\\q3dm17").unwrap();
    writeln!(extra, "  0:10 Kill: 2 3 10: Zeh killed Mal by MOD_RAILGUN").unwrap();
    extra.flush().unwrap();

    let paths = vec![
        fixture("two_games.log"),
        extra.path().to_path_buf(),
        fixture("single_game.log"),
    ];
    let reports = process_files_in_parallel(&paths, 3, ErrorPolicy::FailFast).unwrap();

    let counts: Vec<usize> = reports.iter().map(|r| r.matches.len()).collect();
    assert_eq!(counts, vec![2, 1, 1]);
    assert_eq!(reports[1].matches[0].ranking, vec!["Zeh"]);
    assert_eq!(reports[2].matches[0].total_kills, 7);
}

#[test]
fn parallel_run_fails_if_any_file_fails() {
    let paths = vec![fixture("single_game.log"), fixture("invalid.log")];
    let err = process_files_in_parallel(&paths, 2, ErrorPolicy::FailFast).unwrap_err();
    assert!(matches!(err, QuakeLogError::MalformedEventLine { .. }));
}

#[test]
fn json_file_is_written_for_several_sources() {
    let paths = vec![fixture("single_game.log"), fixture("two_games.log")];
    let reports = process_files_in_parallel(&paths, 2, ErrorPolicy::FailFast).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.json");
    create_json_file(&output, &reports).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let sources = value.as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert!(sources[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("single_game.log"));
    assert_eq!(sources[1]["games"].as_array().unwrap().len(), 2);
    assert_eq!(sources[1]["games"][1]["ranking"][0], "Isgalamido");
}
