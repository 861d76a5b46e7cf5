//! # Self-Test Suite
//!
//! A fixed battery of checks over the formula set, runnable at any time
//! from the interactive menu or with `geocalc test`.
//!
//! Each formula gets one group of three checks:
//!
//! | Check | Expectation |
//! |-------|-------------|
//! | `known_value` | a known input gives the known output |
//! | `non_positive` | zero or a negative gives a value error |
//! | `non_numeric` | text gives a type error |
//!
//! An unexpected value or an unexpected error kind is a failed check, never
//! a crash, so running the suite cannot end the calling loop.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    circle_area, cube_volume, rectangle_area, square_area, triangle_area, ErrorKind,
    MagnitudeError,
};

const TOLERANCE: f64 = 1e-9;

/// Outcome of a single check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// All checks for one formula
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl GroupReport {
    fn new(name: &str, checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self {
            name: name.to_string(),
            passed,
            checks,
        }
    }
}

/// Aggregate result of a suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub passed: bool,
    pub total: usize,
    pub failed: usize,
    pub groups: Vec<GroupReport>,
}

impl SuiteReport {
    pub fn from_groups(groups: Vec<GroupReport>) -> Self {
        let total = groups.iter().map(|g| g.checks.len()).sum();
        let failed = groups
            .iter()
            .flat_map(|g| &g.checks)
            .filter(|c| !c.passed)
            .count();
        Self {
            passed: failed == 0,
            total,
            failed,
            groups,
        }
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{} ... {}", group.name, verdict(group.passed))?;
            for check in &group.checks {
                writeln!(f, "  [{}] {}: {}", verdict(check.passed), check.name, check.detail)?;
            }
        }
        writeln!(f, "{}", "-".repeat(60))?;
        write!(f, "Ran {} checks in {} groups: ", self.total, self.groups.len())?;
        if self.passed {
            write!(f, "OK")
        } else {
            write!(f, "FAILED (failures={})", self.failed)
        }
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "ok"
    } else {
        "FAIL"
    }
}

/// Checks that a formula produced the expected value within tolerance
fn expect_value(name: &str, actual: Result<f64, MagnitudeError>, expected: f64) -> CheckResult {
    let (passed, detail) = match actual {
        Ok(value) if (value - expected).abs() <= TOLERANCE * expected.abs().max(1.0) => {
            (true, format!("got {}", value))
        }
        Ok(value) => (false, format!("expected {}, got {}", expected, value)),
        Err(e) => (false, format!("expected {}, got {} error: {}", expected, e.kind(), e)),
    };
    CheckResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

/// Checks that a formula failed with the expected error kind
fn expect_kind(name: &str, actual: Result<f64, MagnitudeError>, expected: ErrorKind) -> CheckResult {
    let (passed, detail) = match actual {
        Err(e) if e.kind() == expected => (true, format!("{} error: {}", expected, e)),
        Err(e) => (false, format!("expected {} error, got {} error: {}", expected, e.kind(), e)),
        Ok(value) => (false, format!("expected {} error, got {}", expected, value)),
    };
    CheckResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

/// Runs every group and collects the report
pub fn run() -> SuiteReport {
    SuiteReport::from_groups(vec![
        GroupReport::new(
            "circle_area",
            vec![
                expect_value("known_value", circle_area(5), PI * 25.0),
                expect_kind("non_positive", circle_area(-1), ErrorKind::Value),
                expect_kind("non_numeric", circle_area("5"), ErrorKind::Type),
            ],
        ),
        GroupReport::new(
            "triangle_area",
            vec![
                expect_value("known_value", triangle_area(3, 4), 6.0),
                expect_kind("non_positive", triangle_area(0, 4), ErrorKind::Value),
                expect_kind("non_numeric", triangle_area(3, "height"), ErrorKind::Type),
            ],
        ),
        GroupReport::new(
            "square_area",
            vec![
                expect_value("known_value", square_area(2), 4.0),
                expect_kind("non_positive", square_area(-2), ErrorKind::Value),
                expect_kind("non_numeric", square_area("side"), ErrorKind::Type),
            ],
        ),
        GroupReport::new(
            "cube_volume",
            vec![
                expect_value("known_value", cube_volume(2), 8.0),
                expect_kind("non_positive", cube_volume(-2), ErrorKind::Value),
                expect_kind("non_numeric", cube_volume("side"), ErrorKind::Type),
            ],
        ),
        GroupReport::new(
            "rectangle_area",
            vec![
                expect_value("known_value", rectangle_area(5, 3), 15.0),
                expect_kind("non_positive", rectangle_area(0, 3), ErrorKind::Value),
                expect_kind("non_numeric", rectangle_area("5", 3), ErrorKind::Type),
            ],
        ),
    ])
}
