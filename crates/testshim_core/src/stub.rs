//! Call-recording stub.
//!
//! A [`Stub`] stands in for a collaborator. Code under test talks to it through the [`Dispatch`] seam; every call is
//! appended to the stub's invocation log instead of doing real work. Afterwards the test asks
//! [`Stub::assert_called`] whether an expected call happened.
//!
//! ## Matching
//!
//! Verification deliberately keeps a weak rule: a recorded call matches an expectation when the name and arity are
//! equal and **at least one** argument position holds equal values. `f(1, 2)` therefore satisfies an expectation of
//! `f(1, 99)`. A zero-argument expectation has no position that could agree, so it never matches.

use std::cell::RefCell;
use std::fmt;

use crate::errors::{TestOutcome, VerificationFailure};
use crate::value::{self, Value};

/// Generic call entry point for collaborators that can be replaced by a stub.
///
/// Code under test holds a `Rc<dyn Dispatch>` and routes calls through [`Dispatch::invoke`]; nothing about the
/// collaborator's shape is declared in advance.
pub trait Dispatch {
    /// Invoke the capability `name` with the supplied arguments.
    fn invoke(&self, name: &str, args: Vec<Value>);
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<Value>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, value::join(&self.args))
    }
}

/// Expected-call descriptor passed to [`Stub::assert_called`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Check the weak match rule against one recorded invocation.
    fn matches(&self, recorded: &Invocation) -> bool {
        if recorded.name != self.name || recorded.args.len() != self.args.len() {
            return false;
        }
        self.args.iter().zip(&recorded.args).any(|(expected, actual)| expected == actual)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, value::join(&self.args))
    }
}

/// Logical state of a stub. The transition to `Recorded` happens on the first call and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubState {
    Virgin,
    Recorded,
}

/// Test double that records every call made through [`Dispatch`].
#[derive(Debug, Default)]
pub struct Stub {
    called: RefCell<Vec<Invocation>>,
}

impl Stub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call whose positional slots may be unsupplied.
    ///
    /// `None` slots are dropped, so only arguments the caller actually provided end up in the log.
    pub fn invoke_supplied<I>(&self, name: &str, slots: I)
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        self.invoke(name, slots.into_iter().flatten().collect());
    }

    /// Snapshot of the invocation log, in call order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.called.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.called.borrow().len()
    }

    pub fn state(&self) -> StubState {
        if self.called.borrow().is_empty() {
            StubState::Virgin
        } else {
            StubState::Recorded
        }
    }

    /// Verify that a call matching `expected` was recorded.
    ///
    /// ## Errors
    /// - [`crate::Failure::Verification`] when nothing was called, or when no recorded call satisfies the weak match
    ///   rule described in the module docs. The message lists every recorded call.
    pub fn assert_called(&self, expected: &Call) -> TestOutcome {
        let called = self.called.borrow();

        if called.is_empty() {
            return Err(VerificationFailure::nothing_called(expected.to_string()).into());
        }

        for (index, recorded) in called.iter().enumerate() {
            let matched = expected.matches(recorded);
            tracing::trace!(index, candidate = %recorded, matched, "checking recorded call");
            if matched {
                return Ok(());
            }
        }

        let recorded = called.iter().map(ToString::to_string).collect();
        Err(VerificationFailure::no_match(expected.to_string(), recorded).into())
    }
}

impl Dispatch for Stub {
    fn invoke(&self, name: &str, args: Vec<Value>) {
        tracing::debug!(name, arity = args.len(), "stub intercepted call");
        self.called.borrow_mut().push(Invocation {
            name: name.to_string(),
            args,
        });
    }
}
