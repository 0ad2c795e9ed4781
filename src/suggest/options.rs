use crate::config::SuggestConfig;
use crate::search::SearchMode;
use serde::{Deserialize, Serialize};

/// Result cap applied when the caller does not set one
pub const DEFAULT_LIMIT: usize = 10;

/// Per-call lookup options
///
/// Deserializing a partial object fills the missing fields from
/// [`SuggestOptions::default`], so `{"limit": 3}` keeps the default mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned
    pub limit: usize,

    /// Matching mode handed to the search index
    pub mode: SearchMode,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: SearchMode::Speed,
        }
    }
}

impl SuggestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set search mode
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

impl From<&SuggestConfig> for SuggestOptions {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            limit: config.default_limit,
            mode: config.default_mode,
        }
    }
}
