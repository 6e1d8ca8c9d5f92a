//! Bundled demo: a small unit under test, a stubbed collaborator, and a suite exercising both.

use std::rc::Rc;

use testshim_core::{Call, Dispatch, Stub, TestObject, args, assert_integer_equals};

use crate::runner::{Suite, TestClass, TestMarker};

/// Unit under test. Its collaborator is reached only through the [`Dispatch`] seam.
pub struct UnderTest {
    pub collaborator: Rc<dyn Dispatch>,
}

impl UnderTest {
    pub fn new(collaborator: Rc<dyn Dispatch>) -> Self {
        Self { collaborator }
    }

    pub fn returns_four(&self) -> i64 {
        4
    }

    pub fn does_something_important(&self) {
        self.collaborator.invoke("important_function", args!["hello", "world"]);
    }
}

pub const DEMO_CLASS: &str = "file_under_test";

/// Build the demo suite.
///
/// One case asserts against the wrong arguments on purpose; it carries an xfail marker so a healthy run stays green.
pub fn demo_suite() -> Suite {
    let stub = Rc::new(Stub::new());
    let under_test = Rc::new(UnderTest::new(stub.clone()));

    let object = TestObject::new()
        .test("returns_four_should_return_four", {
            let under_test = Rc::clone(&under_test);
            move || assert_integer_equals(4, under_test.returns_four())
        })
        .test("does_something_important_this_test_should_fail", {
            let (under_test, stub) = (Rc::clone(&under_test), Rc::clone(&stub));
            move || {
                under_test.does_something_important();
                stub.assert_called(&Call::new("important_function", args!["wrong", "args"]))
            }
        })
        .test("does_something_important_should_do_something_important", {
            let (under_test, stub) = (Rc::clone(&under_test), Rc::clone(&stub));
            move || {
                under_test.does_something_important();
                stub.assert_called(&Call::new("important_function", args!["hello", "world"]))
            }
        });

    let class = TestClass::from_object(DEMO_CLASS, &object).mark(
        "does_something_important_this_test_should_fail",
        TestMarker::XFail("asserts a call that never happens".to_string()),
    );

    Suite::new("demo").with_class(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{RecordingReporter, Runner, TestResult};

    #[test]
    fn test_demo_suite_shape() {
        let desc = demo_suite().describe();
        assert_eq!(desc.test_count(), 3);
        assert_eq!(desc.children[0].display_name, DEMO_CLASS);
    }

    #[test]
    fn test_demo_suite_run_is_green() {
        let mut reporter = RecordingReporter::new();
        let summary = Runner::default().run(&demo_suite(), &mut reporter);

        assert_eq!(summary.passed, 2);
        assert_eq!(summary.xfailed, 1);
        assert!(summary.is_success());
        assert!(matches!(reporter.results()[1].1, TestResult::XFailed(..)));
    }

    #[test]
    fn test_collaborator_receives_call() {
        let stub = Rc::new(Stub::new());
        let under_test = UnderTest::new(stub.clone());
        under_test.does_something_important();
        assert_eq!(stub.calls()[0].to_string(), "important_function(hello,world)");
    }
}
