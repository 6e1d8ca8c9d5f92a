//! Assertion and verification failures.
//!
//! Both kinds abort the current test case only. They travel up to the harness as `Err(Failure)` and are never
//! meant to be caught by the code under test.

use thiserror::Error;

use crate::value::Value;

/// Result type returned by test bodies and assertions.
pub type TestOutcome = Result<(), Failure>;

/// Raised by [`crate::assert_integer_equals`] on mismatch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ComparisonFailure {
    pub expected: Value,
    pub actual: Value,
    pub message: String,
}

impl ComparisonFailure {
    pub fn new(expected: Value, actual: Value) -> Self {
        let message = format!("Expected <{expected}> but was <{actual}>");
        Self {
            expected,
            actual,
            message,
        }
    }
}

/// Raised by [`crate::Stub::assert_called`] when no recorded call satisfies the expectation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerificationFailure {
    /// Rendered expected descriptor, e.g. `importantFunction(hello,world)`.
    pub expected: String,
    /// All recorded calls, rendered, in log order.
    pub recorded: Vec<String>,
    pub message: String,
}

impl VerificationFailure {
    pub(crate) fn nothing_called(expected: String) -> Self {
        let message = format!("No functions called, expected: {expected}");
        Self {
            expected,
            recorded: Vec::new(),
            message,
        }
    }

    pub(crate) fn no_match(expected: String, recorded: Vec<String>) -> Self {
        let message = format!(
            "No matching functions called. expected: <{}> but had <{}>",
            expected,
            recorded.join("|")
        );
        Self {
            expected,
            recorded,
            message,
        }
    }
}

/// Any failure a test body can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    #[error(transparent)]
    Comparison(#[from] ComparisonFailure),

    #[error(transparent)]
    Verification(#[from] VerificationFailure),
}

impl Failure {
    /// Canonical kind name, used as a prefix in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Comparison(_) => "ComparisonFailure",
            Failure::Verification(_) => "VerificationFailure",
        }
    }
}
