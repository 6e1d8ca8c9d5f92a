//! Runner configuration

/// Options controlling which cases run and how results are reported.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Report each case on its own line with timings
    pub verbose: bool,
    /// Stop after the first failing case
    pub stop_on_fail: bool,
    /// Only run cases whose name contains this keyword
    pub filter: Option<String>,
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Whether a case with this name is selected by the keyword filter.
    pub fn selects(&self, case_name: &str) -> bool {
        self.filter.as_deref().is_none_or(|keyword| case_name.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_everything() {
        let config = RunConfig::new();
        assert!(config.selects("anything"));
        assert!(!config.verbose);
        assert!(!config.stop_on_fail);
    }

    #[test]
    fn test_filter_is_substring_match() {
        let config = RunConfig::new().with_filter("important");
        assert!(config.selects("does_something_important_should_do_something_important"));
        assert!(!config.selects("returns_four_should_return_four"));
    }
}
