mod common;
use common::{SAMPLE_CSV, no_config, rtc, temp_out, write_input};
use predicates::str::contains;
use rtimecard::core::grouping::{GroupedEntries, build_index};
use rtimecard::core::parser::parse;
use rtimecard::export::build_activity_rows;
use rtimecard::utils::time::DEFAULT_CLOCK_FORMAT;
use std::fs;

#[test]
fn test_export_json_matches_index() {
    let input = write_input("export_json", SAMPLE_CSV);
    let cfg = no_config("export_json");
    let out = temp_out("export_json", "json");

    rtc()
        .args([
            "--config", &cfg, "-i", &input, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"2024-01-05\""));
    assert!(content.contains("\"unknown\""));

    let exported: GroupedEntries = serde_json::from_str(&content).expect("valid json");
    let expected = build_index(&parse(SAMPLE_CSV).expect("parse sample"));
    assert_eq!(exported, expected);
}

#[test]
fn test_export_csv_single_agent() {
    let input = write_input("export_csv_agent", SAMPLE_CSV);
    let cfg = no_config("export_csv_agent");
    let out = temp_out("export_csv_agent", "csv");

    rtc()
        .args([
            "--config", &cfg, "-i", &input, "export", "--format", "csv", "--file", &out,
            "--agent", "A100",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("agent,day,schedule,time,event,aux_reason,duration_min")
    );
    assert!(content.contains("A100,2024-01-10,9:00 AM - 6:30 PM,2024-01-10T09:00:00,LOGON"));
    assert!(content.contains("Break,15.5"));
    assert!(!content.contains("B200"));
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let input = write_input("export_force", SAMPLE_CSV);
    let cfg = no_config("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").expect("seed output file");

    rtc()
        .args(["--config", &cfg, "-i", &input, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "keep me");

    rtc()
        .args(["--config", &cfg, "-i", &input, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read output").starts_with("agent,"));
}

#[test]
fn test_export_unknown_format() {
    let input = write_input("export_bad_format", SAMPLE_CSV);
    let cfg = no_config("export_bad_format");
    let out = temp_out("export_bad_format", "xml");

    rtc()
        .args([
            "--config", &cfg, "-i", &input, "export", "--format", "xml", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: xml"));
}

#[test]
fn test_activity_rows_order() {
    let grouped = build_index(&parse(SAMPLE_CSV).expect("parse sample"));
    let rows = build_activity_rows(&grouped, None, DEFAULT_CLOCK_FORMAT);

    assert_eq!(rows.len(), 8);

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.agent.as_str(), r.day.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("A100", "2024-01-10"),
            ("A100", "2024-01-10"),
            ("A100", "2024-01-05"),
            ("A100", "2024-01-05"),
            ("A100", "2024-01-05"),
            ("B200", "2024-01-05"),
            ("B200", "unknown"),
            ("", "2024-01-06"),
        ]
    );
    assert_eq!(rows[5].schedule, "");
}
