//! Reporting of test execution results.
//!
//! The runner never prints directly. It calls a [`TestReporter`] at each step, which lets callers swap the console
//! output for something else (or capture events in tests via [`RecordingReporter`]).

use std::time::Duration;

use super::suite::TestMarker;

/// Information about a case that is about to run (or just ran)
#[derive(Debug, Clone, PartialEq)]
pub struct TestInfo {
    pub class_name: String,
    pub case_name: String,
    pub markers: Vec<TestMarker>,
}

impl TestInfo {
    /// `class::case`, the identifier shown in reports
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.class_name, self.case_name)
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            TestMarker::Skip(reason) => Some(reason.as_str()),
            TestMarker::XFail(_) => None,
        })
    }

    pub fn xfail_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            TestMarker::XFail(reason) => Some(reason.as_str()),
            TestMarker::Skip(_) => None,
        })
    }
}

/// Result of running a single case
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    Passed(Duration),
    Failed(Duration, String),
    Skipped(String),
    XFailed(Duration, String),
    XPassed(Duration),
}

impl TestResult {
    /// Failed outright, or passed while expected to fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed(..) | TestResult::XPassed(_))
    }
}

/// Summary of test run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub xfailed: usize,
    pub xpassed: usize,
    pub duration: Duration,
}

impl TestSummary {
    pub(crate) fn record(&mut self, result: &TestResult) {
        self.total += 1;
        match result {
            TestResult::Passed(_) => self.passed += 1,
            TestResult::Failed(..) => self.failed += 1,
            TestResult::Skipped(_) => self.skipped += 1,
            TestResult::XFailed(..) => self.xfailed += 1,
            TestResult::XPassed(_) => self.xpassed += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.xpassed == 0
    }

    /// `"2 passed, 1 failed"` style line (counts of zero are left out)
    pub fn counts_line(&self) -> String {
        let mut parts = Vec::new();
        if self.passed > 0 {
            parts.push(format!("{} passed", self.passed));
        }
        if self.failed > 0 {
            parts.push(format!("{} failed", self.failed));
        }
        if self.skipped > 0 {
            parts.push(format!("{} skipped", self.skipped));
        }
        if self.xfailed > 0 {
            parts.push(format!("{} xfailed", self.xfailed));
        }
        if self.xpassed > 0 {
            parts.push(format!("{} xpassed", self.xpassed));
        }
        if parts.is_empty() {
            "no tests ran".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Trait for reporting test execution results.
///
/// Implement this trait to customize test output format (JSON, TAP, etc.)
pub trait TestReporter {
    /// Called once the selected cases are known
    fn on_collection_complete(&mut self, test_count: usize);

    /// Called when a case begins
    fn on_test_start(&mut self, test: &TestInfo);

    /// Called when a case completes
    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult);

    /// Called when all cases have completed
    fn on_run_complete(&mut self, summary: &TestSummary);
}

/// Default console reporter (pytest-style)
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
    failures: Vec<(String, String)>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            failures: Vec::new(),
        }
    }
}

impl TestReporter for ConsoleReporter {
    fn on_collection_complete(&mut self, test_count: usize) {
        if test_count == 0 {
            eprintln!("No tests collected");
            return;
        }
        eprintln!("\x1b[1m=================== test session starts ===================\x1b[0m");
        eprintln!("collected {} item(s)", test_count);
        eprintln!();
    }

    fn on_test_start(&mut self, test: &TestInfo) {
        if self.verbose {
            eprint!("{} ... ", test.qualified_name());
        }
    }

    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult) {
        let status = status_text(result, self.verbose);
        if self.verbose {
            eprintln!("{status}");
        } else {
            eprint!("{status}");
        }

        let message = match result {
            TestResult::Failed(_, message) => message.as_str(),
            TestResult::XPassed(_) => "passed but was marked xfail",
            _ => return,
        };
        self.failures.push((test.qualified_name(), message.to_string()));
    }

    fn on_run_complete(&mut self, summary: &TestSummary) {
        if !self.verbose {
            eprintln!();
        }

        if !self.failures.is_empty() {
            eprintln!();
            eprintln!("\x1b[1;31m=================== FAILURES ===================\x1b[0m");
            for (name, message) in &self.failures {
                eprintln!();
                eprintln!("\x1b[1m___________ {} ___________\x1b[0m", name);
                eprintln!();
                eprintln!("    {}", message);
            }
        }

        let color = if summary.is_success() { "1;32" } else { "1;31" };
        let banner = format!(
            "====== {} in {:.2}s ======",
            summary.counts_line(),
            summary.duration.as_secs_f64()
        );
        eprintln!();
        eprintln!("{}", paint(color, banner));
    }
}

const GREEN: &str = "32";
const RED: &str = "31";
const YELLOW: &str = "33";

fn paint(color: &str, text: impl std::fmt::Display) -> String {
    format!("\x1b[{color}m{text}\x1b[0m")
}

/// Progress text for one finished case: a single glyph in compact mode, the status word and its detail in verbose
/// mode.
fn status_text(result: &TestResult, verbose: bool) -> String {
    let (color, word, glyph) = match result {
        TestResult::Passed(_) => (GREEN, "PASSED", '.'),
        TestResult::Failed(..) => (RED, "FAILED", 'F'),
        TestResult::Skipped(_) => (YELLOW, "SKIPPED", 's'),
        TestResult::XFailed(..) => (YELLOW, "XFAIL", 'x'),
        TestResult::XPassed(_) => (RED, "XPASS", 'X'),
    };
    if !verbose {
        return paint(color, glyph);
    }

    let detail = match result {
        TestResult::Passed(d) | TestResult::Failed(d, _) | TestResult::XPassed(d) => Some(format!("{}ms", d.as_millis())),
        TestResult::Skipped(reason) | TestResult::XFailed(_, reason) if !reason.is_empty() => Some(reason.clone()),
        TestResult::Skipped(_) | TestResult::XFailed(..) => None,
    };
    match detail {
        Some(detail) => format!("{} ({detail})", paint(color, word)),
        None => paint(color, word),
    }
}

/// One reporter callback, captured by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Collected(usize),
    Started(String),
    Completed(String, TestResult),
    Finished(TestSummary),
}

/// Reporter that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in completion order, keyed by qualified name
    pub fn results(&self) -> Vec<(&str, &TestResult)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Completed(name, result) => Some((name.as_str(), result)),
                _ => None,
            })
            .collect()
    }
}

impl TestReporter for RecordingReporter {
    fn on_collection_complete(&mut self, test_count: usize) {
        self.events.push(ReportEvent::Collected(test_count));
    }

    fn on_test_start(&mut self, test: &TestInfo) {
        self.events.push(ReportEvent::Started(test.qualified_name()));
    }

    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult) {
        self.events
            .push(ReportEvent::Completed(test.qualified_name(), result.clone()));
    }

    fn on_run_complete(&mut self, summary: &TestSummary) {
        self.events.push(ReportEvent::Finished(summary.clone()));
    }
}
