#![forbid(unsafe_code)]
//! testshim: call-recording stubs, a strict integer assertion, and a small harness that runs registered test cases.
//!
//! The stub, assertion and registrar live in [`testshim_core`] and are re-exported here. This crate adds the runner
//! (execution, markers, reporting), the bundled demo suite, and the CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Test bodies**: panics inside a test body are caught by the runner and reported as failures.

pub mod cli;
pub mod demo;
pub mod runner;

pub use testshim_core::{
    Call, ComparisonFailure, Dispatch, Failure, Invocation, Stub, StubState, TestBody, TestCase, TestObject,
    TestOutcome, Value, VerificationFailure, args, assert_integer_equals, tests,
};

pub use runner::{ConsoleReporter, Description, RunConfig, Runner, Suite, TestClass, TestMarker, TestReporter};
