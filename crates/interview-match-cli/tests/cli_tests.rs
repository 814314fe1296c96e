//! Integration tests for the `interview-match` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, against the bundled sample roster and the JSON
//! fixtures next to this file.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn roster_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/roster.json")
}

fn bookings_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bookings.json")
}

fn bad_roster_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_roster.json")
}

fn cli() -> Command {
    Command::cargo_bin("interview-match").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Roster listing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lists_sample_candidates() {
    cli()
        .arg("candidates")
        .assert()
        .success()
        .stdout(predicate::str::contains("cand1"))
        .stdout(predicate::str::contains("Emma Wilson"))
        .stdout(predicate::str::contains("prefers Tuesday 2-5 PM"));
}

#[test]
fn lists_engineers_from_roster_file_as_json() {
    let output = cli()
        .args(["--roster", roster_path(), "--format", "json", "engineers"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["e1", "e2", "e3"]);
}

#[test]
fn invalid_roster_is_rejected() {
    cli()
        .args(["--roster", bad_roster_path(), "engineers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid roster"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_json_matches_fixture_scenario() {
    let output = cli()
        .args(["--roster", roster_path(), "--format", "json", "slots", "-c", "c1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = value.as_array().unwrap();
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0]["timeSlot"]["time"], "10:00");
    assert_eq!(slots[0]["availableEngineers"], serde_json::json!(["e1"]));
    assert_eq!(slots[2]["timeSlot"]["time"], "11:00");
    assert_eq!(slots[2]["availableEngineers"], serde_json::json!(["e2"]));
}

#[test]
fn slots_skip_existing_bookings() {
    let output = cli()
        .args([
            "--roster",
            roster_path(),
            "--bookings",
            bookings_path(),
            "--format",
            "json",
            "slots",
            "--candidate",
            "c1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = value.as_array().unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["timeSlot"]["time"], "10:30");
}

#[test]
fn slots_text_groups_by_day_with_names() {
    cli()
        .args(["--roster", roster_path(), "slots", "-c", "c1", "-e", "e2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Monday\n"))
        .stdout(predicate::str::contains("11:00 AM  Second Engineer (e2)"))
        .stdout(predicate::str::contains("First Engineer").not());
}

#[test]
fn slots_with_no_overlap_say_so() {
    // c1 is Monday-only; e3 only works Fridays.
    cli()
        .args(["--roster", roster_path(), "slots", "-c", "c1", "-e", "e3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overlapping slots."));
}

#[test]
fn unknown_candidate_fails() {
    cli()
        .args(["slots", "--candidate", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown candidate: nobody"));
}

#[test]
fn unknown_engineer_filter_fails() {
    cli()
        .args(["slots", "--candidate", "cand1", "--engineer", "eng9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown engineer: eng9"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Booking
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn book_appends_and_then_blocks_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("bookings.json");
    let ledger = ledger.to_str().unwrap();

    cli()
        .args([
            "--bookings", ledger, "book", "-c", "cand1", "-e", "eng2", "--day", "tuesday",
            "--time", "14:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked cand1 with eng2 on Tuesday, 2:00 PM"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ledger).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["engineerId"], "eng2");

    // eng2 is now taken at Tuesday 14:00, even for another candidate.
    cli()
        .args([
            "--bookings", ledger, "book", "-c", "cand4", "-e", "eng2", "--day", "tuesday",
            "--time", "14:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn book_accepts_zero_padded_time() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("bookings.json");
    let ledger = ledger.to_str().unwrap();

    cli()
        .args([
            "--bookings", ledger, "book", "-c", "cand3", "-e", "eng1", "--day", "thursday",
            "--time", "09:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked cand3 with eng1 on Thursday, 9:00 AM"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ledger).unwrap()).unwrap();
    assert_eq!(saved[0]["timeSlot"]["time"], "9:00");

    // The saved booking removes Thursday 9:00 from eng1's offered slots.
    let output = cli()
        .args([
            "--bookings", ledger, "--format", "json", "slots", "-c", "cand3", "-e", "eng1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let slots: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots[0]["timeSlot"]["day"], "thursday");
    assert_eq!(slots[0]["timeSlot"]["time"], "9:30");
}

#[test]
fn padded_time_in_bookings_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("bookings.json");
    std::fs::write(
        &ledger,
        r#"[{"candidateId":"c","engineerId":"eng1","timeSlot":{"day":"monday","time":"09:00"}}]"#,
    )
    .unwrap();

    cli()
        .args(["--bookings", ledger.to_str().unwrap(), "slots", "-c", "cand2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bookings"))
        .stderr(predicate::str::contains("Non-canonical slot time: 09:00"));
}

#[test]
fn duplicate_roster_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    std::fs::write(
        &roster,
        r#"{"engineers":[
            {"id":"e","name":"A","availability":[{"day":"monday","startTime":"9:00","endTime":"10:00"}]},
            {"id":"e","name":"B","availability":[{"day":"monday","startTime":"10:00","endTime":"12:00"}]}]}"#,
    )
    .unwrap();

    cli()
        .args(["--roster", roster.to_str().unwrap(), "engineers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate engineer id: e"));
}

#[test]
fn book_without_bookings_file_fails() {
    cli()
        .args([
            "book", "-c", "cand1", "-e", "eng2", "--day", "tuesday", "--time", "14:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bookings"));
}

#[test]
fn book_rejects_weekend_day() {
    cli()
        .args([
            "book", "-c", "cand1", "-e", "eng2", "--day", "saturday", "--time", "14:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Range check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_end_is_exclusive() {
    cli()
        .args(["check", "--time", "12:00", "--start", "9:00", "--end", "12:00"])
        .assert()
        .success()
        .stdout("false\n");

    cli()
        .args(["check", "--time", "11:59", "--start", "9:00", "--end", "12:00"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn check_rejects_malformed_time() {
    cli()
        .args(["check", "--time", "noon", "--start", "9:00", "--end", "12:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --time: noon"));
}
