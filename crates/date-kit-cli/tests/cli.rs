use assert_cmd::Command;
use predicates::prelude::*;

fn datekit() -> Command {
    let mut cmd = Command::cargo_bin("datekit").unwrap();
    cmd.env_remove("DATEKIT_NOW").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_format_day_first() {
    datekit()
        .args(["format", "2024-11-19", "DD/MM/YYYY"])
        .assert()
        .success()
        .stdout("19/11/2024\n");
}

#[test]
fn test_readable() {
    datekit()
        .args(["readable", "2024-11-19"])
        .assert()
        .success()
        .stdout("19 november 2024\n");
}

#[test]
fn test_add_negative_days() {
    datekit()
        .args(["add-days", "2024-03-01", "-1"])
        .assert()
        .success()
        .stdout("2024-02-29T00:00:00+00:00\n");
}

#[test]
fn test_weekend_and_business_day() {
    datekit()
        .args(["weekend", "2024-11-23"])
        .assert()
        .success()
        .stdout("true\n");
    datekit()
        .args(["business-day", "2024-11-23"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_next_business_day_after_friday() {
    datekit()
        .args(["next-business-day", "2024-11-22"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2024-11-25"));
}

#[test]
fn test_business_days_count() {
    datekit()
        .args(["business-days", "2024-11-20", "2024-11-27"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_recur_monthly_clamps() {
    datekit()
        .args(["recur", "2024-01-31", "monthly", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-29").and(predicate::str::contains("2024-03-29")));
}

#[test]
fn test_recur_monthly_roll() {
    datekit()
        .args(["recur", "2023-01-31", "monthly", "2", "--overflow", "roll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-03-03"));
}

#[test]
fn test_recur_unknown_frequency_fails() {
    datekit()
        .args(["recur", "2024-11-19", "fortnightly", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frequency"));
}

#[test]
fn test_recur_json_output() {
    let output = datekit()
        .args(["--json", "recur", "2024-11-19", "daily", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dates = value["dates"].as_array().unwrap();
    assert_eq!(dates.len(), 3);
    assert_eq!(dates[2], "2024-11-21T00:00:00+00:00");
    assert_eq!(value["request"]["frequency"], "daily");
}

#[test]
fn test_ago_with_explicit_now() {
    datekit()
        .args(["ago", "2024-11-17T12:00:00Z", "--now", "2024-11-19T12:00:00Z"])
        .assert()
        .success()
        .stdout("2 day(s) ago\n");
}

#[test]
fn test_until_reads_now_from_env() {
    datekit()
        .env("DATEKIT_NOW", "2024-11-19T12:00:00Z")
        .args(["until", "2024-11-22T12:00:00Z"])
        .assert()
        .success()
        .stdout("3 day(s) from now\n");
}

#[test]
fn test_convert_brussels_summer() {
    datekit()
        .args(["convert", "2024-07-15T12:00:00Z", "Europe/Brussels"])
        .assert()
        .success()
        .stdout("2024-07-15T14:00:00+02:00\n");
}

#[test]
fn test_convert_unknown_zone_fails() {
    datekit()
        .args(["convert", "2024-07-15T12:00:00Z", "Mars/Olympus_Mons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}

#[test]
fn test_invalid_date_is_rejected() {
    datekit()
        .args(["readable", "19/11/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime"));
}

#[test]
fn test_add_days_out_of_range_fails() {
    datekit()
        .args(["add-days", "2024-01-01", "999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
