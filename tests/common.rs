#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdaylayout::TimedEvent;
use rdaylayout::utils::time::TimeOfDay;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test with colors off and a config path that never exists.
pub fn rdl() -> Command {
    let mut cmd = cargo_bin_cmd!("rdaylayout");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rdaylayout_{}.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Config path for CLI tests: guaranteed absent, so defaults apply.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{}_noconf", name), "conf")
        .to_string_lossy()
        .to_string()
}

/// Event from "HH:MM" strings.
pub fn ev(id: &str, start: &str, end: &str) -> TimedEvent {
    TimedEvent::from_times(
        id,
        TimeOfDay::parse(start).expect("start"),
        TimeOfDay::parse(end).expect("end"),
    )
}

pub const SAMPLE_JSON: &str = r#"[
  { "id": "standup", "title": "Stand-up", "start": "08:00", "end": "10:00" },
  { "id": "dentist", "title": "Dentist", "start": "08:30", "end": "09:30" },
  { "id": "review", "title": "Review", "start": "09:00", "end": "11:00" },
  { "id": "lunch", "title": "Lunch", "start": "12:00", "end": "13:00" }
]"#;
