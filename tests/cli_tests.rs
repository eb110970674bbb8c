use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SAMPLE_CSV, no_config, rtc, write_input};

#[test]
fn test_agents_from_file() {
    let input = write_input("agents_file", SAMPLE_CSV);
    let cfg = no_config("agents_file");

    rtc()
        .args(["--config", &cfg, "--input", &input, "agents"])
        .assert()
        .success()
        .stdout("A100\nB200\n");
}

#[test]
fn test_agents_from_stdin() {
    let cfg = no_config("agents_stdin");

    rtc()
        .args(["--config", &cfg, "agents"])
        .write_stdin(SAMPLE_CSV)
        .assert()
        .success()
        .stdout(contains("A100").and(contains("B200")));
}

#[test]
fn test_show_agent_table() {
    let input = write_input("show_agent", SAMPLE_CSV);
    let cfg = no_config("show_agent");

    rtc()
        .args(["--config", &cfg, "-i", &input, "show", "--agent", "A100"])
        .assert()
        .success()
        .stdout(contains("Wed 01/10"))
        .stdout(contains("9:00 AM - 6:30 PM"))
        .stdout(contains("Fri 01/05"))
        .stdout(contains("8:00 AM - 5:00 PM"))
        .stdout(contains("⚡ LOGON"))
        .stdout(contains("AUX (15.50 min)"));
}

#[test]
fn test_show_unknown_day_row() {
    let input = write_input("show_unknown", SAMPLE_CSV);
    let cfg = no_config("show_unknown");

    rtc()
        .args(["--config", &cfg, "-i", &input, "show", "-a", "B200"])
        .assert()
        .success()
        .stdout(contains("Unknown"))
        .stdout(contains("not-a-date"));
}

#[test]
fn test_show_missing_agent_fails() {
    let input = write_input("show_missing", SAMPLE_CSV);
    let cfg = no_config("show_missing");

    rtc()
        .args(["--config", &cfg, "-i", &input, "show", "--agent", "ZZZ"])
        .assert()
        .failure()
        .stderr(contains("Invalid agent: ZZZ"));
}

#[test]
fn test_malformed_input_reports_parse_error() {
    let input = write_input("malformed", "Time,Agent\n\"2024-01-05T08:00:00,A1\n");
    let cfg = no_config("malformed");

    rtc()
        .args(["--config", &cfg, "-i", &input, "agents"])
        .assert()
        .failure()
        .stderr(contains("Parse error"));
}

#[test]
fn test_init_and_print_config() {
    let cfg = no_config("init_print");

    rtc()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();
    assert!(std::path::Path::new(&cfg).exists());

    rtc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("time_format"))
        .stdout(contains("show_icons: true"));
}

#[test]
fn test_config_changes_rendering() {
    let cfg = no_config("custom_format");
    std::fs::write(&cfg, "time_format: \"%H:%M\"\nshow_icons: false\n").expect("write config");
    let input = write_input("custom_format", SAMPLE_CSV);

    rtc()
        .args(["--config", &cfg, "-i", &input, "show", "-a", "A100"])
        .assert()
        .success()
        .stdout(contains("08:00 - 17:00"))
        .stdout(contains("⚡").not());
}

#[test]
fn test_invalid_config_is_rejected() {
    let cfg = no_config("bad_delimiter");
    std::fs::write(&cfg, "delimiter: \"::\"\n").expect("write config");
    let input = write_input("bad_delimiter", SAMPLE_CSV);

    rtc()
        .args(["--config", &cfg, "-i", &input, "agents"])
        .assert()
        .failure()
        .stderr(contains("invalid delimiter"));
}
