//! Test registration: ordered name → body mappings turned into runnable test cases.

use std::fmt;
use std::rc::Rc;

use crate::errors::TestOutcome;

/// Zero-argument test body.
pub type TestBody = Rc<dyn Fn() -> TestOutcome>;

/// A named, runnable test case handed to a harness.
#[derive(Clone)]
pub struct TestCase {
    pub name: String,
    pub body: TestBody,
}

impl TestCase {
    pub fn new(name: impl Into<String>, body: TestBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Run the body once.
    pub fn run(&self) -> TestOutcome {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered mapping from test names to bodies.
///
/// Entries defined on this object are its *own* entries; an optional prototype supplies inherited entries that are
/// visible through [`TestObject::get`] but never registered by [`tests`]. Own entries keep insertion order, and
/// redefining a name replaces the body in place.
#[derive(Clone, Default)]
pub struct TestObject {
    own: Vec<(String, TestBody)>,
    prototype: Option<Rc<TestObject>>,
}

impl TestObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object that inherits from `prototype`.
    pub fn with_prototype(prototype: Rc<TestObject>) -> Self {
        Self {
            own: Vec::new(),
            prototype: Some(prototype),
        }
    }

    /// Builder form of [`TestObject::define`].
    pub fn test<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> TestOutcome + 'static,
    {
        self.define(name, body);
        self
    }

    /// Define (or redefine) an own entry.
    pub fn define<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn() -> TestOutcome + 'static,
    {
        let name = name.into();
        let body: TestBody = Rc::new(body);
        match self.own.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = body,
            None => self.own.push((name, body)),
        }
    }

    /// Look up an entry, walking the prototype chain.
    pub fn get(&self, name: &str) -> Option<TestBody> {
        self.own
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| Rc::clone(body))
            .or_else(|| self.prototype.as_ref().and_then(|p| p.get(name)))
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.own.iter().any(|(n, _)| n == name)
    }

    /// Own entry names, in insertion order.
    pub fn own_names(&self) -> impl Iterator<Item = &str> {
        self.own.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.own.len()
    }

    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }
}

impl fmt::Debug for TestObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestObject")
            .field("own", &self.own_names().collect::<Vec<_>>())
            .field("prototype", &self.prototype)
            .finish()
    }
}

impl<K, F> FromIterator<(K, F)> for TestObject
where
    K: Into<String>,
    F: Fn() -> TestOutcome + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        let mut object = TestObject::new();
        for (name, body) in iter {
            object.define(name, body);
        }
        object
    }
}

/// Turn a test object into test cases, one per own entry, in insertion order.
///
/// Inherited entries are skipped. Whether a body actually passes is left to whoever runs it.
pub fn tests(object: &TestObject) -> Vec<TestCase> {
    object
        .own
        .iter()
        .map(|(name, body)| TestCase::new(name.clone(), Rc::clone(body)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod registration_tests {
    use super::*;
    use crate::assert::assert_integer_equals;
    use std::cell::Cell;

    #[test]
    fn test_registers_own_entries_in_order() {
        let object = TestObject::new().test("b", || Ok(())).test("a", || Ok(())).test("c", || Ok(()));
        let names: Vec<_> = tests(&object).into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_each_case_runs_its_own_body() {
        let hits = Rc::new(Cell::new(0));
        let (h1, h2) = (Rc::clone(&hits), Rc::clone(&hits));
        let object = TestObject::new()
            .test("a", move || {
                h1.set(h1.get() + 1);
                Ok(())
            })
            .test("b", move || {
                h2.set(h2.get() + 10);
                assert_integer_equals(1, 2)
            });

        let cases = tests(&object);
        cases[0].run().unwrap();
        assert_eq!(hits.get(), 1);
        assert!(cases[1].run().is_err());
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn test_inherited_entries_are_excluded() {
        let base = Rc::new(TestObject::new().test("inherited", || Ok(())));
        let object = TestObject::with_prototype(base).test("own", || Ok(()));

        assert!(object.get("inherited").is_some());
        assert!(!object.has_own("inherited"));

        let cases = tests(&object);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name, "own");
    }

    #[test]
    fn test_redefinition_keeps_position() {
        let mut object = TestObject::new().test("a", || Ok(())).test("b", || Ok(()));
        object.define("a", || assert_integer_equals(0, 1));

        let cases = tests(&object);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "a");
        assert!(cases[0].run().is_err());
    }

    #[test]
    fn test_empty_object_registers_nothing() {
        assert!(tests(&TestObject::new()).is_empty());
    }

    #[test]
    fn test_from_iter_preserves_order() {
        fn pass() -> TestOutcome {
            Ok(())
        }
        let object: TestObject = [("z", pass as fn() -> TestOutcome), ("y", pass)].into_iter().collect();
        assert_eq!(object.own_names().collect::<Vec<_>>(), ["z", "y"]);
    }
}
