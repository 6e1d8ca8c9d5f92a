//! Property-based tests for the runner's bookkeeping.
//!
//! Whatever mix of passing, failing, panicking and marked cases a suite holds, every case lands in exactly one summary
//! bucket and the reporter sees one completion per case.

use proptest::prelude::*;
use testshim::runner::{RecordingReporter, ReportEvent};
use testshim::{RunConfig, Runner, Suite, TestClass, TestMarker, TestObject, assert_integer_equals};

#[derive(Debug, Clone, Copy)]
enum Body {
    Pass,
    Fail,
    Panic,
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    None,
    Skip,
    XFail,
}

fn case() -> impl Strategy<Value = (Body, Mark)> {
    let body = prop_oneof![Just(Body::Pass), Just(Body::Fail), Just(Body::Panic)];
    let mark = prop_oneof![3 => Just(Mark::None), 1 => Just(Mark::Skip), 1 => Just(Mark::XFail)];
    (body, mark)
}

fn build_suite(cases: &[(Body, Mark)]) -> Suite {
    let object: TestObject = cases.iter().enumerate().fold(TestObject::new(), |object, (index, (body, _))| {
        let name = format!("case_{index}");
        match body {
            Body::Pass => object.test(name, || Ok(())),
            Body::Fail => object.test(name, || assert_integer_equals(0, 1)),
            Body::Panic => object.test(name, || panic!("boom")),
        }
    });

    let mut class = TestClass::from_object("generated", &object);
    for (index, (_, mark)) in cases.iter().enumerate() {
        let name = format!("case_{index}");
        class = match mark {
            Mark::None => class,
            Mark::Skip => class.mark(&name, TestMarker::Skip("generated".into())),
            Mark::XFail => class.mark(&name, TestMarker::XFail("generated".into())),
        };
    }

    Suite::new("properties").with_class(class)
}

fn count(cases: &[(Body, Mark)], wanted: impl Fn(Body, Mark) -> bool) -> usize {
    cases.iter().filter(|(body, mark)| wanted(*body, *mark)).count()
}

proptest! {
    /// Property: the summary buckets partition the cases that ran
    #[test]
    fn summary_counts_add_up(cases in prop::collection::vec(case(), 0..16)) {
        let mut reporter = RecordingReporter::new();
        let summary = Runner::new(RunConfig::new()).run(&build_suite(&cases), &mut reporter);

        prop_assert_eq!(summary.total, cases.len());
        prop_assert_eq!(
            summary.passed + summary.failed + summary.skipped + summary.xfailed + summary.xpassed,
            summary.total
        );
        prop_assert_eq!(reporter.results().len(), cases.len());
        prop_assert!(matches!(reporter.events.last(), Some(ReportEvent::Finished(s)) if *s == summary));
    }

    /// Property: each case lands in the bucket its body and marker call for
    #[test]
    fn summary_buckets_follow_outcomes(cases in prop::collection::vec(case(), 0..16)) {
        let summary = Runner::default().run(&build_suite(&cases), &mut RecordingReporter::new());

        let passes = |b: Body| matches!(b, Body::Pass);

        prop_assert_eq!(summary.passed, count(&cases, |b, m| matches!(m, Mark::None) && passes(b)));
        prop_assert_eq!(summary.failed, count(&cases, |b, m| matches!(m, Mark::None) && !passes(b)));
        prop_assert_eq!(summary.skipped, count(&cases, |_, m| matches!(m, Mark::Skip)));
        prop_assert_eq!(summary.xfailed, count(&cases, |b, m| matches!(m, Mark::XFail) && !passes(b)));
        prop_assert_eq!(summary.xpassed, count(&cases, |b, m| matches!(m, Mark::XFail) && passes(b)));
        prop_assert_eq!(summary.is_success(), summary.failed == 0 && summary.xpassed == 0);
    }
}
