//! Suggestion index powered by Tantivy
//!
//! A suggestion index holds the distinct values of one facet (instrument
//! names, platforms, ...) as one document per value. Indexes are built
//! elsewhere, serialized into an [`IndexSnapshot`] and parked in the cache
//! store under the facet name. This module turns those bytes back into a
//! searchable index:
//!
//! ```text
//! ┌──────────────┐  decode   ┌───────────────┐  open   ┌──────────────────┐
//! │ snapshot blob│ ────────▶ │ IndexSnapshot │ ──────▶ │ RamDirectory     │
//! └──────────────┘           └───────────────┘         │ + Tantivy Index  │
//!                                                      └────────┬─────────┘
//!                                                               │ top-K
//!                                                               ▼
//!                                                      ordered Vec<String>
//! ```
//!
//! # Example
//!
//! ```no_run
//! use autocomplete_suggest::search::{SearchMode, SuggestionIndex};
//!
//! # fn main() -> autocomplete_suggest::error::Result<()> {
//! let bytes = SuggestionIndex::build(["MODIS", "MODIS-TERRA", "ASTER"])?.export()?;
//!
//! let index = SuggestionIndex::import(&bytes)?;
//! let suggestions = index.search("modis", 1, SearchMode::Speed)?;
//! assert_eq!(suggestions, vec!["MODIS".to_string()]);
//! # Ok(())
//! # }
//! ```

mod index;
mod query;
mod snapshot;

pub use index::{SuggestionIndex, VALUE_FIELD};
pub use snapshot::{IndexSnapshot, SnapshotFile, SNAPSHOT_FORMAT_VERSION};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Latency/recall trade-off applied when matching a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Whole-token matches only
    #[default]
    Speed,
    /// Whole-token matches, except the last token which matches as a prefix
    Match,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Speed => "speed",
            SearchMode::Match => "match",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "speed" => Ok(SearchMode::Speed),
            "match" => Ok(SearchMode::Match),
            other => Err(format!(
                "unknown search mode '{}', expected 'speed' or 'match'",
                other
            )),
        }
    }
}
