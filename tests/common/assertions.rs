//! Logged assertion helpers for dynamic_color tests.
//!
//! These wrap the standard assertions with tracing logs so CI output shows
//! the actual and expected values next to the failure.

#![allow(dead_code)]

use std::fmt::Debug;

use dynamic_color::Color;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );

    tracing::trace!(context = context, "assertion passed");
}

/// Assert that a value is true with logging.
#[track_caller]
pub fn assert_true_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "asserting true");

    if !value {
        tracing::error!(context = context, "assertion failed: expected true");
    }

    assert!(value, "{context}: expected true, got false");
}

/// Assert that a value is false with logging.
#[track_caller]
pub fn assert_false_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "asserting false");

    if value {
        tracing::error!(context = context, "assertion failed: expected false");
    }

    assert!(!value, "{context}: expected false, got true");
}

/// Assert that a color serializes to `expected` (`#rrggbb`).
///
/// The failure message includes the actual hex string, which is what one
/// needs to diagnose an off-by-one channel.
#[track_caller]
pub fn assert_hex_logged(context: &str, color: Color, expected: &str) {
    let actual = color.to_hex_string();
    tracing::debug!(
        context = context,
        expected = expected,
        actual = %actual,
        "asserting hex string"
    );

    if !color.is_equal_to_hex_string(expected) {
        tracing::error!(
            context = context,
            expected = expected,
            actual = %actual,
            "assertion failed: hex mismatch"
        );
        panic!("{context}: color string should be equal to {expected} (not {actual})");
    }
}

/// Assert approximate equality with logging.
#[track_caller]
pub fn assert_approx_eq_logged(context: &str, actual: f64, expected: f64, epsilon: f64) {
    tracing::debug!(
        context = context,
        expected = expected,
        actual = actual,
        epsilon = epsilon,
        "asserting approximate equality"
    );

    let diff = (actual - expected).abs();
    if diff > epsilon {
        tracing::error!(
            context = context,
            expected = expected,
            actual = actual,
            diff = diff,
            "assertion failed: values not approximately equal"
        );
        panic!("{context}: expected {expected} (within {epsilon}), got {actual} (diff: {diff})");
    }
}

/// Assert that a Result is Err with logging, returning the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => e,
        Ok(ref value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err, got Ok");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}
