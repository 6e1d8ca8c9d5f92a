//! Call-recording test doubles, assertions and test registration.
//!
//! This crate is intentionally small and IO-free. It provides:
//! - [`Stub`]: records every call made through the [`Dispatch`] seam and verifies expected calls afterwards,
//! - [`assert_integer_equals`]: a strict integer-equality assertion,
//! - [`tests`]: turns a [`TestObject`] (ordered name → body mapping) into [`TestCase`]s for a harness.
//!
//! ## Notes
//!
//! - Everything here is single-threaded. Stubs are shared through `Rc` and are deliberately `!Send`.
//! - Failures are values ([`Failure`]); test bodies return [`TestOutcome`] so `?` propagates them to the harness.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod assert;
pub mod errors;
pub mod registrar;
pub mod stub;
pub mod value;

pub use assert::assert_integer_equals;
pub use errors::{ComparisonFailure, Failure, TestOutcome, VerificationFailure};
pub use registrar::{TestBody, TestCase, TestObject, tests};
pub use stub::{Call, Dispatch, Invocation, Stub, StubState};
pub use value::Value;

/// Build a `Vec<Value>` from heterogeneous literals.
///
/// ```rust
/// use testshim_core::{Value, args};
/// assert_eq!(args!["hello", 1, true], vec![Value::from("hello"), Value::Int(1), Value::Bool(true)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
