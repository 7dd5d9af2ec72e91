use predicates::str::contains;

mod common;
use common::{momo_at, setup_home, write_august_2023, write_config};

#[test]
fn test_list_shows_recorded_days() {
    let home = setup_home();
    write_august_2023(home.path());

    momo_at(home.path(), "2023-08-16 17:00")
        .args(["list", "--month", "2023-08"])
        .assert()
        .success()
        .stdout(contains("2023-08-08 (Tue)"))
        .stdout(contains("2023-08-14 (Mon)"))
        .stdout(contains("08:25 - 09:52"))
        .stdout(contains("6.14 h"))
        .stdout(contains("3.70 h"))
        .stdout(contains("Total: 12.84 h"));
}

#[test]
fn test_list_empty_month() {
    let home = setup_home();

    momo_at(home.path(), "2023-08-16 17:00")
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No records for 2023-08"));
}

#[test]
fn test_list_rejects_invalid_month() {
    let home = setup_home();

    momo_at(home.path(), "2023-08-16 17:00")
        .args(["list", "--month", "2023-13"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid month: 2023-13"));
}

#[test]
fn test_config_print() {
    let home = setup_home();
    write_config(home.path(), 32);

    momo_at(home.path(), "2023-08-16 17:00")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("irwaz: 32"));
}

#[test]
fn test_config_print_creates_defaults() {
    let home = setup_home();

    momo_at(home.path(), "2023-08-16 17:00")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("irwaz: 40"));

    assert!(home.path().join("momo.conf").is_file());
}
