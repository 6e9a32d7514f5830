// src/config.rs
// =============================================================================
// Run configuration, built once from the command line and passed down by
// reference. Nothing here changes after the walk starts.
// =============================================================================

use std::time::Duration;

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default limit on how many directory levels a walk may descend
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings for the HTTP client and the walker
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Depth 0 is the root listing; descending past this fails the walk
    pub max_depth: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("webindex/{}", env!("CARGO_PKG_VERSION")),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// How a visitor treats the tree. Fixed for a whole top-level walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Download only: record failed files and keep going
    pub ignore_error: bool,
}

impl TraversalOptions {
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn ignore_error(mut self, ignore_error: bool) -> Self {
        self.ignore_error = ignore_error;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_depth, 32);
        assert!(config.user_agent.starts_with("webindex/"));

        let options = TraversalOptions::default();
        assert!(!options.recursive);
        assert!(!options.ignore_error);
    }

    #[test]
    fn test_builder_methods() {
        let options = TraversalOptions::default().recursive(true).ignore_error(true);
        assert_eq!(options, TraversalOptions { recursive: true, ignore_error: true });
    }
}
