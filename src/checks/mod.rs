//! Self-check suite for the arithmetic exercises.
//!
//! Mirrors the assertion skeleton handed out with the exercise: each check is
//! a named predicate, and the suite stops at the first one that fails.

use anyhow::{bail, Result};
use log::{debug, info};

use crate::arithmetic::{average, is_valid_age, minutes_to_seconds};
use crate::config::{AVERAGE_TOLERANCE, INVALID_MINUTES_SENTINEL};

/// One named assertion.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// The function under test.
    pub group: &'static str,
    /// What the assertion states, reported when it fails.
    pub description: &'static str,
    /// Evaluates the assertion.
    pub holds: fn() -> bool,
}

/// The assertions of the exercise skeleton, in execution order.
pub fn all() -> Vec<Check> {
    vec![
        Check {
            group: "average",
            description: "average(10.0, 2) == 5.0",
            holds: || average(10.0, 2) == 5.0,
        },
        Check {
            group: "average",
            description: "average(0.0, 1) == 0.0",
            holds: || average(0.0, 1) == 0.0,
        },
        Check {
            group: "average",
            description: "average(7.5, 3) is 2.5 within tolerance",
            holds: || (average(7.5, 3) - 2.5).abs() < AVERAGE_TOLERANCE,
        },
        Check {
            group: "average",
            description: "average(15.0, 0) must guard the division by zero",
            holds: || average(15.0, 0) == 0.0,
        },
        Check {
            group: "is_valid_age",
            description: "18 is a valid age",
            holds: || is_valid_age(18),
        },
        Check {
            group: "is_valid_age",
            description: "0 is not a valid age",
            holds: || !is_valid_age(0),
        },
        Check {
            group: "is_valid_age",
            description: "135 is not a valid age",
            holds: || !is_valid_age(135),
        },
        Check {
            group: "minutes_to_seconds",
            description: "minutes_to_seconds(5) == 300",
            holds: || minutes_to_seconds(5) == 300,
        },
        Check {
            group: "minutes_to_seconds",
            description: "minutes_to_seconds(0) == 0",
            holds: || minutes_to_seconds(0) == 0,
        },
        Check {
            group: "minutes_to_seconds",
            description: "negative minutes must return the error code",
            holds: || minutes_to_seconds(-2) == INVALID_MINUTES_SENTINEL,
        },
    ]
}

/// Runs `checks` in order and fails on the first one that does not hold.
pub fn run(checks: &[Check]) -> Result<()> {
    for check in checks {
        debug!("Running check {}: {}", check.group, check.description);
        if !(check.holds)() {
            bail!("check failed: {}: {}", check.group, check.description);
        }
    }
    info!("{} checks passed", checks.len());
    Ok(())
}

/// Runs the full suite returned by [`all`].
pub fn run_all() -> Result<()> {
    run(&all())
}
