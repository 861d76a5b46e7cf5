//! CLI integration tests for geocalc
//!
//! These tests drive the binary end to end: the interactive menu with a
//! scripted stdin, the one-shot commands, and the self-test command.

use predicates::prelude::*;

/// Get a command instance for the geocalc binary
fn geocalc_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("geocalc"))
}

// =============================================================================
// Interactive Menu Tests
// =============================================================================

#[test]
fn test_interactive_prints_banner_and_exits() {
    geocalc_cmd()
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage Instructions"))
        .stdout(predicate::str::contains("--- Geometry Calculator ---"))
        .stdout(predicate::str::contains("7. Exit"));
}

#[test]
fn test_interactive_subcommand_is_the_default() {
    geocalc_cmd()
        .arg("interactive")
        .write_stdin("3\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Square area: 4"));
}

#[test]
fn test_interactive_survives_bad_input() {
    geocalc_cmd()
        .write_stdin("42\nhello\n1\nabc\n3\nxyz\n5\n0\n3\n4\n4\n5\n5\n3\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option. Choose a number between 1 and 7.",
        ))
        .stdout(predicate::str::contains("invalid option 'hello'"))
        .stdout(predicate::str::contains("the entered value is not a number"))
        .stdout(predicate::str::contains("could not convert 'xyz' to a number"))
        .stdout(predicate::str::contains("the value must be greater than zero"))
        .stdout(predicate::str::contains("Cube volume: 64"))
        .stdout(predicate::str::contains("Rectangle area: 15"));
}

#[test]
fn test_interactive_exits_cleanly_on_end_of_input() {
    geocalc_cmd()
        .write_stdin("2\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Triangle area: 6"));
}

#[test]
fn test_interactive_survives_invalid_utf8() {
    geocalc_cmd()
        .write_stdin(&b"3\n\xff\xfe\n3\n2\n7\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("the input is not valid UTF-8"))
        .stdout(predicate::str::contains("Square area: 4"));
}

#[test]
fn test_interactive_accepts_non_ascii_digits() {
    geocalc_cmd()
        .write_stdin("1\n٣\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Circle area: {}",
            std::f64::consts::PI * 9.0
        )));
}

#[test]
fn test_interactive_runs_self_tests() {
    geocalc_cmd()
        .write_stdin("6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ran 15 checks in 5 groups: OK"));
}

#[test]
fn test_verbose_goes_to_stderr() {
    geocalc_cmd()
        .arg("--verbose")
        .write_stdin("7\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose] geocalc starting"))
        .stdout(predicate::str::contains("[verbose]").not());
}

// =============================================================================
// One-Shot Command Tests
// =============================================================================

#[test]
fn test_circle_command() {
    geocalc_cmd()
        .args(["circle", "1"])
        .assert()
        .success()
        .stdout(format!("Circle area: {}\n", std::f64::consts::PI));
}

#[test]
fn test_shape_commands_text_output() {
    let cases: [(&[&str], &str); 4] = [
        (&["triangle", "3", "4"], "Triangle area: 6\n"),
        (&["square", "2"], "Square area: 4\n"),
        (&["cube", "2"], "Cube volume: 8\n"),
        (&["rectangle", "5", "3"], "Rectangle area: 15\n"),
    ];

    for (args, expected) in cases {
        geocalc_cmd()
            .args(args)
            .assert()
            .success()
            .stdout(expected.to_string());
    }
}

#[test]
fn test_negative_side_fails() {
    geocalc_cmd()
        .args(["square", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: the value must be greater than zero, got -2",
        ));
}

#[test]
fn test_non_numeric_argument_fails() {
    geocalc_cmd()
        .args(["rectangle", "5", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not convert 'wide' to a number"));
}

#[test]
fn test_json_measurement() {
    let output = geocalc_cmd()
        .args(["triangle", "3", "4", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["shape"], "triangle");
    assert_eq!(json["label"], "Triangle area");
    assert_eq!(json["inputs"]["base"], 3.0);
    assert_eq!(json["inputs"]["height"], 4.0);
    assert_eq!(json["value"], 6.0);
}

#[test]
fn test_json_error_carries_kind() {
    let output = geocalc_cmd()
        .args(["cube", "0", "-f", "json"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&output.get_output().stderr);
    let json: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "value");
}

// =============================================================================
// Self-Test and Banner Tests
// =============================================================================

#[test]
fn test_test_command_passes() {
    geocalc_cmd()
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("circle_area ... ok"))
        .stdout(predicate::str::contains("Ran 15 checks in 5 groups: OK"));
}

#[test]
fn test_banner_command() {
    geocalc_cmd()
        .arg("banner")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage Instructions"))
        .stdout(predicate::str::contains("--- Geometry Calculator ---").not());
}
