//! Validation configuration

/// Validation options
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Report properties the schema does not declare on closed objects
    /// (default: true)
    pub deny_unknown_properties: bool,

    /// Check string values against `pattern` regexes (default: true)
    pub check_patterns: bool,

    /// Report read-only properties set in a template (default: true)
    pub report_read_only: bool,

    /// Stop after this many errors; 0 means unlimited
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            deny_unknown_properties: true,
            check_patterns: true,
            report_read_only: true,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    pub fn allow_unknown_properties(mut self) -> Self {
        self.deny_unknown_properties = false;
        self
    }

    pub fn without_patterns(mut self) -> Self {
        self.check_patterns = false;
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Returns true once `count` errors have used up the budget
    pub fn limit_reached(&self, count: usize) -> bool {
        self.max_errors != 0 && count >= self.max_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.deny_unknown_properties);
        assert!(config.check_patterns);
        assert!(config.report_read_only);
        assert_eq!(config.max_errors, 0);
        assert!(!config.limit_reached(1000));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ValidationConfig::default()
            .allow_unknown_properties()
            .without_patterns()
            .with_max_errors(2);
        assert!(!config.deny_unknown_properties);
        assert!(!config.check_patterns);
        assert!(!config.limit_reached(1));
        assert!(config.limit_reached(2));
    }
}
