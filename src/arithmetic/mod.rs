//! Arithmetic and validation helpers from the "funções" exercise list.
//!
//! Invalid input is reported through sentinel return values rather than
//! `Result`, so every function here is total and side-effect free.

use crate::config::{
    INVALID_MINUTES_SENTINEL, MAX_VALID_AGE, MIN_VALID_AGE, SECONDS_PER_MINUTE,
    ZERO_COUNT_AVERAGE,
};

/// Average of `count` values whose total is `sum`.
///
/// A zero `count` skips the division and yields [`ZERO_COUNT_AVERAGE`].
pub fn average(sum: f64, count: i32) -> f64 {
    if count == 0 {
        return ZERO_COUNT_AVERAGE;
    }
    sum / f64::from(count)
}

/// Whether `age` falls within `MIN_VALID_AGE..=MAX_VALID_AGE`.
pub fn is_valid_age(age: i32) -> bool {
    (MIN_VALID_AGE..=MAX_VALID_AGE).contains(&age)
}

/// Converts minutes to seconds, or returns [`INVALID_MINUTES_SENTINEL`]
/// for negative input.
///
/// The product is computed in `i64`, so no `i32` input can overflow.
pub fn minutes_to_seconds(minutes: i32) -> i64 {
    if minutes < 0 {
        return INVALID_MINUTES_SENTINEL;
    }
    i64::from(minutes) * SECONDS_PER_MINUTE
}
