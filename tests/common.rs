#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn momo() -> Command {
    cargo_bin_cmd!("momo")
}

/// Fresh, empty home directory that is removed when dropped
pub fn setup_home() -> TempDir {
    tempfile::tempdir().expect("create temp home")
}

/// `momo` bound to `home` and a fixed reference instant
pub fn momo_at(home: &Path, now: &str) -> Command {
    let mut cmd = momo();
    cmd.args(["--alt-home", &home.to_string_lossy(), "--now", now]);
    cmd
}

pub fn write_config(home: &Path, irwaz: u32) {
    fs::write(home.join("momo.conf"), format!("irwaz: {irwaz}\n")).expect("write config");
}

/// August 2023: 368 min on the 8th, 180 min on Monday the 14th, and 207 min
/// plus an interval still open since 16:45 on Wednesday the 16th.
pub fn write_august_2023(home: &Path) {
    let content = r#"{
  "month": "2023-08",
  "days": [
    { "day": "08-08", "records": [ { "start": "08:30", "stop": "14:38" } ] },
    { "day": "08-14", "records": [ { "start": "09:00", "stop": "12:00" } ] },
    { "day": "08-16", "records": [
        { "start": "08:25", "stop": "09:52" },
        { "start": "12:00", "stop": "14:00" },
        { "start": "16:45" }
    ] }
  ]
}
"#;
    fs::write(home.join("2023-08.momo"), content).expect("write month file");
}
