//! Test runner: executes registered test cases and reports each outcome.
//!
//! ## Isolation
//!
//! Each case runs on its own. A body that returns `Err(Failure)` or panics is reported as failed and the runner moves
//! on to the next case, unless `stop_on_fail` is set.
//!
//! ## Markers
//!
//! - `Skip(reason)`: the body is not run.
//! - `XFail(reason)`: a failure is expected; it is reported as `XFAIL`, and an unexpected pass as `XPASS` (which
//!   counts as a failure).

pub mod config;
pub mod reporter;
pub mod suite;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use testshim_core::TestCase;

pub use config::RunConfig;
pub use reporter::{ConsoleReporter, RecordingReporter, ReportEvent, TestInfo, TestReporter, TestResult, TestSummary};
pub use suite::{Description, Suite, TestClass, TestMarker};

/// Runs a [`Suite`] against a [`TestReporter`].
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every selected case in suite order.
    #[tracing::instrument(skip_all, fields(suite = %suite.name))]
    pub fn run(&self, suite: &Suite, reporter: &mut dyn TestReporter) -> TestSummary {
        let start_time = Instant::now();

        let selected: Vec<(TestInfo, &TestCase)> = suite
            .classes
            .iter()
            .flat_map(|class| {
                class.cases.iter().map(move |case| {
                    let info = TestInfo {
                        class_name: class.name.clone(),
                        case_name: case.name.clone(),
                        markers: class.markers(&case.name).to_vec(),
                    };
                    (info, case)
                })
            })
            .filter(|(info, _)| self.config.selects(&info.case_name))
            .collect();

        tracing::debug!(selected = selected.len(), total = suite.case_count(), "collected cases");
        reporter.on_collection_complete(selected.len());

        let mut summary = TestSummary::default();

        for (info, case) in selected {
            reporter.on_test_start(&info);
            let result = run_single_test(&info, case);

            if result.is_failure() {
                tracing::warn!(test = %info.qualified_name(), "test failed");
            }

            summary.record(&result);
            reporter.on_test_complete(&info, &result);

            if self.config.stop_on_fail && result.is_failure() {
                tracing::info!("stopping after first failure");
                break;
            }
        }

        summary.duration = start_time.elapsed();
        reporter.on_run_complete(&summary);
        summary
    }
}

fn run_single_test(info: &TestInfo, case: &TestCase) -> TestResult {
    if let Some(reason) = info.skip_reason() {
        return TestResult::Skipped(reason.to_string());
    }

    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| case.run()));
    let duration = start.elapsed();

    let error = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(failure)) => Some(format!("{}: {}", failure.kind(), failure)),
        Err(payload) => Some(format!("panicked: {}", panic_message(payload.as_ref()))),
    };

    match (info.xfail_reason(), error) {
        (None, None) => TestResult::Passed(duration),
        (None, Some(message)) => TestResult::Failed(duration, message),
        (Some(_), None) => TestResult::XPassed(duration),
        (Some(reason), Some(_)) => TestResult::XFailed(duration, reason.to_string()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
