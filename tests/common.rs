#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Export with two agents, a row without agent, a row without time and an
/// unparseable timestamp. Headers carry stray spaces on purpose.
pub const SAMPLE_CSV: &str = "\
Time, Agent, Aux Reason, Wm Name, DurationMin
2024-01-05T08:00:00,A100,,LOGON,0
2024-01-05T10:15:00,A100,Break,AUX,15.5
2024-01-05T17:00:00,A100,,LOGOFF,0
2024-01-10T09:00:00,A100,,LOGON,0
2024-01-10T18:30:00,A100,,LOGOFF,0
2024-01-05T07:45:00,B200,,LOGON,0
,A100,,AUX,3

2024-01-06T07:45:00,,,LOGON,0
not-a-date,B200,,AUX,1
";

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecard")
}

/// Path of a config file that does not exist, so defaults are used
pub fn no_config(name: &str) -> String {
    temp_out(&format!("{}_cfg", name), "conf")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh input file in tempdir
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard_in.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}
