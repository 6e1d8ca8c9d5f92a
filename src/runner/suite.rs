//! Suite structure: suite → test classes → test cases.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use testshim_core::{TestCase, TestObject, tests};

#[derive(Debug, Clone, PartialEq)]
pub enum TestMarker {
    Skip(String),
    XFail(String),
}

/// A named group of test cases, usually everything registered from one test object.
#[derive(Debug, Clone)]
pub struct TestClass {
    pub name: String,
    pub cases: Vec<TestCase>,
    markers: HashMap<String, Vec<TestMarker>>,
}

impl TestClass {
    pub fn new(name: impl Into<String>, cases: Vec<TestCase>) -> Self {
        Self {
            name: name.into(),
            cases,
            markers: HashMap::new(),
        }
    }

    /// Register every own entry of `object` as a case of this class.
    pub fn from_object(name: impl Into<String>, object: &TestObject) -> Self {
        Self::new(name, tests(object))
    }

    /// Attach a marker to the case called `case`.
    pub fn mark(mut self, case: &str, marker: TestMarker) -> Self {
        self.markers.entry(case.to_string()).or_default().push(marker);
        self
    }

    pub fn markers(&self, case: &str) -> &[TestMarker] {
        self.markers.get(case).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
pub struct Suite {
    pub name: String,
    pub classes: Vec<TestClass>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: TestClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn case_count(&self) -> usize {
        self.classes.iter().map(|c| c.cases.len()).sum()
    }

    /// Build the description tree: suite, then one node per class, then one leaf per case.
    pub fn describe(&self) -> Description {
        let children = self
            .classes
            .iter()
            .map(|class| {
                let cases = class
                    .cases
                    .iter()
                    .map(|case| Description::leaf(format!("{}::{}", class.name, case.name)))
                    .collect();
                Description::node(class.name.clone(), cases)
            })
            .collect();

        Description::node(self.name.clone(), children)
    }
}

/// Node in a suite's description tree.
///
/// Only leaves built with [`Description::leaf`] stand for test cases; a class or suite node stays a container even
/// when it has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub display_name: String,
    pub children: Vec<Description>,
    is_test: bool,
}

impl Description {
    /// A single test case.
    pub fn leaf(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            children: Vec::new(),
            is_test: true,
        }
    }

    /// A container (class or suite) holding `children`.
    pub fn node(display_name: impl Into<String>, children: Vec<Description>) -> Self {
        Self {
            display_name: display_name.into(),
            children,
            is_test: false,
        }
    }

    pub fn is_test(&self) -> bool {
        self.is_test
    }

    /// Number of test-case leaves below (or at) this node.
    pub fn test_count(&self) -> usize {
        if self.is_test {
            1
        } else {
            self.children.iter().map(Description::test_count).sum()
        }
    }

    fn write_indented(&self, out: &mut String, depth: usize) -> fmt::Result {
        writeln!(out, "{}{}", "  ".repeat(depth), self.display_name)?;
        for child in &self.children {
            child.write_indented(out, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_indented(&mut out, 0)?;
        f.write_str(out.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object() -> TestObject {
        TestObject::new().test("a", || Ok(())).test("b", || Ok(()))
    }

    #[test]
    fn test_describe_builds_three_levels() {
        let suite = Suite::new("suite").with_class(TestClass::from_object("first", &object()));
        let desc = suite.describe();

        assert_eq!(desc.display_name, "suite");
        assert_eq!(desc.children.len(), 1);
        assert_eq!(desc.children[0].children[1], Description::leaf("first::b"));
        assert_eq!(desc.test_count(), 2);
    }

    #[test]
    fn test_description_display_is_indented() {
        let suite = Suite::new("s").with_class(TestClass::from_object("c", &object()));
        assert_eq!(suite.describe().to_string(), "s\n  c\n    c::a\n    c::b");
    }

    #[test]
    fn test_empty_containers_hold_no_tests() {
        let empty_class = Suite::new("s").with_class(TestClass::from_object("empty", &TestObject::new()));
        let desc = empty_class.describe();
        assert!(!desc.children[0].is_test());
        assert_eq!(desc.test_count(), 0);
        assert_eq!(desc.test_count(), empty_class.case_count());

        let empty_suite = Suite::new("s");
        assert!(!empty_suite.describe().is_test());
        assert_eq!(empty_suite.describe().test_count(), 0);
    }

    #[test]
    fn test_count_matches_case_count() {
        let suite = Suite::new("s")
            .with_class(TestClass::from_object("first", &object()))
            .with_class(TestClass::from_object("empty", &TestObject::new()))
            .with_class(TestClass::from_object("third", &TestObject::new().test("c", || Ok(()))));
        assert_eq!(suite.describe().test_count(), 3);
        assert_eq!(suite.describe().test_count(), suite.case_count());
    }

    #[test]
    fn test_markers_attach_by_case_name() {
        let class = TestClass::from_object("c", &object()).mark("b", TestMarker::Skip("later".into()));
        assert!(class.markers("a").is_empty());
        assert_eq!(class.markers("b"), [TestMarker::Skip("later".into())]);
    }
}
