use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{momo_at, setup_home};

#[test]
fn test_track_creates_month_file_and_opens_interval() {
    let home = setup_home();

    momo_at(home.path(), "2024-03-04 08:15")
        .arg("track")
        .assert()
        .success()
        .stdout(contains("Time 08:15 was recorded"))
        .stdout(contains("time tracking is active"))
        .stdout(contains("1 daily periods recognized"));

    let content = fs::read_to_string(home.path().join("2024-03.momo")).expect("month file");
    assert!(content.contains("\"month\": \"2024-03\""));
    assert!(content.contains("\"day\": \"03-04\""));
    assert!(content.contains("\"start\": \"08:15\""));
    assert!(!content.contains("\"stop\""));
}

#[test]
fn test_track_twice_closes_interval() {
    let home = setup_home();

    momo_at(home.path(), "2024-03-04 08:15")
        .arg("track")
        .assert()
        .success();

    momo_at(home.path(), "2024-03-04 12:45")
        .arg("track")
        .assert()
        .success()
        .stdout(contains("time tracking is off"))
        .stdout(contains("The today's working time is 4.50 hours."));

    let content = fs::read_to_string(home.path().join("2024-03.momo")).expect("month file");
    assert!(content.contains("\"stop\": \"12:45\""));
}

#[test]
fn test_track_on_a_new_day_starts_a_new_entry() {
    let home = setup_home();

    for now in ["2024-03-04 08:00", "2024-03-04 16:00", "2024-03-05 09:00"] {
        momo_at(home.path(), now).arg("track").assert().success();
    }

    let content = fs::read_to_string(home.path().join("2024-03.momo")).expect("month file");
    assert!(content.contains("\"day\": \"03-04\""));
    assert!(content.contains("\"day\": \"03-05\""));
}

#[test]
fn test_track_fails_when_directory_occupies_month_file() {
    let home = setup_home();
    fs::create_dir(home.path().join("2023-06.momo")).expect("create dir");

    momo_at(home.path(), "2023-06-12 09:00")
        .arg("track")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("(not a regular file)"));
}

#[test]
fn test_track_fails_on_malformed_month_file() {
    let home = setup_home();
    let path = home.path().join("2023-06.momo");
    fs::write(&path, "not json at all").expect("write file");

    momo_at(home.path(), "2023-06-12 09:00")
        .arg("track")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Malformed data").and(contains("2023-06.momo")));

    // the broken file is left as it was
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
}

#[test]
fn test_track_rejects_punch_before_open_interval() {
    let home = setup_home();
    momo_at(home.path(), "2024-03-04 17:00").arg("track").assert().success();
    let path = home.path().join("2024-03.momo");
    let before = fs::read_to_string(&path).unwrap();

    momo_at(home.path(), "2024-03-04 09:00")
        .arg("track")
        .assert()
        .code(1)
        .stderr(contains("Invalid date/time").and(contains("17:00")));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}
