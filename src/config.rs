//! Editor configuration

use std::env;

/// Tunables for the editor
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Tolerance in pixels offered by default when simplifying a path
    pub simplify_tolerance: f64,
    /// Event count above which field search runs in parallel
    pub parallel_search_threshold: usize,
    /// Name given to groups created without one
    pub default_group_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: 5.0,
            parallel_search_threshold: 1000,
            default_group_name: "New Group".to_string(),
        }
    }
}

impl EditorConfig {
    pub const ENV_SIMPLIFY_TOLERANCE: &'static str = "MACRO_EDITOR_SIMPLIFY_TOLERANCE";
    pub const ENV_PARALLEL_SEARCH_THRESHOLD: &'static str = "MACRO_EDITOR_PARALLEL_SEARCH_THRESHOLD";
    pub const ENV_DEFAULT_GROUP_NAME: &'static str = "MACRO_EDITOR_DEFAULT_GROUP_NAME";

    /// Defaults overridden by `MACRO_EDITOR_*` environment variables.
    /// Values that do not parse are ignored.
    pub fn from_env() -> Self {
        Self::default().merge_vars(|key| env::var(key).ok())
    }

    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(tolerance) = lookup(Self::ENV_SIMPLIFY_TOLERANCE)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
        {
            self.simplify_tolerance = tolerance;
        }
        if let Some(threshold) = lookup(Self::ENV_PARALLEL_SEARCH_THRESHOLD)
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            self.parallel_search_threshold = threshold;
        }
        if let Some(name) = lookup(Self::ENV_DEFAULT_GROUP_NAME)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            self.default_group_name = name;
        }
        self
    }

    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Self {
        self.simplify_tolerance = tolerance;
        self
    }

    pub fn with_parallel_search_threshold(mut self, threshold: usize) -> Self {
        self.parallel_search_threshold = threshold;
        self
    }

    pub fn with_default_group_name(mut self, name: impl Into<String>) -> Self {
        self.default_group_name = name.into();
        self
    }
}
