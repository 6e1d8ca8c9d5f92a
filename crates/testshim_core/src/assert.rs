//! Assertion helpers for test bodies.
//!
//! Only integer equality is provided; anything broader belongs in a general assertion library.

use crate::errors::{ComparisonFailure, TestOutcome};
use crate::value::Value;

/// Assert that `expected` and `actual` are the same integer.
///
/// Equality is strict: both sides must be integral numbers (`Int`, or a `Float` with no fractional part) with the
/// same value. A string, boolean or null never equals an integer.
///
/// ## Errors
/// - [`crate::Failure::Comparison`] with the message `Expected <{expected}> but was <{actual}>`. The message holds
///   rendered values only, so `4` and `"4"` read `Expected <4> but was <4>`; the `expected` and `actual` fields keep
///   the typed values, and their [`Value::kind`] tells the two apart.
///
/// ## Examples
/// ```rust
/// use testshim_core::assert_integer_equals;
/// assert!(assert_integer_equals(4, 4).is_ok());
/// assert!(assert_integer_equals(4, "4").is_err());
/// ```
pub fn assert_integer_equals(expected: impl Into<Value>, actual: impl Into<Value>) -> TestOutcome {
    let expected = expected.into();
    let actual = actual.into();

    match (expected.as_integer(), actual.as_integer()) {
        (Some(e), Some(a)) if e == a => Ok(()),
        _ => {
            tracing::debug!(
                expected = %expected,
                expected_kind = expected.kind(),
                actual = %actual,
                actual_kind = actual.kind(),
                "integer comparison failed"
            );
            Err(ComparisonFailure::new(expected, actual).into())
        }
    }
}
