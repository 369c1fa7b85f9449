//! End-to-end tests for the vigorish binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn vigorish() -> Command {
    Command::cargo_bin("vigorish").expect("binary exists")
}

#[test]
fn test_help() {
    vigorish()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parlay"))
        .stdout(predicate::str::contains("--total-odds"))
        .stdout(predicate::str::contains("--take"));
}

#[test]
fn test_version() {
    vigorish()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vigorish"));
}

#[test]
fn test_two_standard_legs() {
    vigorish()
        .args(["-110", "-110"])
        .assert()
        .success()
        .stdout("264 total odds\n274 fair odds\n");
}

#[test]
fn test_offered_total_overrides_computed_line() {
    vigorish()
        .args(["-110", "-110", "--total-odds", "250"])
        .assert()
        .success()
        .stdout("250 total odds\n274 fair odds\n");
}

#[test]
fn test_zero_take_matches_market() {
    vigorish()
        .args(["150", "--total-odds", "150", "--take", "0"])
        .assert()
        .success()
        .stdout("150 total odds\n150 fair odds\n");
}

#[test]
fn test_requires_at_least_one_leg() {
    vigorish()
        .assert()
        .failure()
        .stderr(predicate::str::contains("LEG_ODDS"));
}

#[test]
fn test_rejects_leg_inside_forbidden_interval() {
    vigorish()
        .args(["-110", "50"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("50 is not a valid American line"));
}

#[test]
fn test_rejects_offered_total_inside_forbidden_interval() {
    vigorish()
        .args(["-110", "--total-odds", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("20 is not a valid American line"));
}

#[test]
fn test_rejects_take_of_one() {
    vigorish()
        .args(["-110", "--take", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("take must be a fraction in [0, 1)"));
}

#[test]
fn test_negative_take_rejected() {
    vigorish()
        .args(["-110", "--take", "-0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("take"));
}
