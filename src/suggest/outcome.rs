use crate::error::SuggestError;
use serde::{Deserialize, Serialize};

/// The envelope returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCollection {
    /// Matching values, best first
    pub suggestions: Vec<String>,

    /// The facet type that was queried, echoed verbatim
    #[serde(rename = "type")]
    pub facet_type: String,
}

impl SuggestionCollection {
    pub fn empty(facet_type: impl Into<String>) -> Self {
        Self {
            suggestions: Vec::new(),
            facet_type: facet_type.into(),
        }
    }
}

/// What actually happened during a lookup
///
/// Callers of [`crate::suggest::resolve`] only see the flattened
/// [`SuggestionCollection`], where every variant but `Matched` becomes an
/// empty list.
#[derive(Debug)]
pub enum ResolveOutcome {
    /// The index was searched and returned at least one value
    Matched(Vec<String>),

    /// The index was searched and nothing matched
    NoMatch,

    /// No index is stored under the facet type
    MissingKey,

    /// The store read, the import or the search failed
    Failed(SuggestError),
}

impl ResolveOutcome {
    /// Metric label for this outcome
    pub fn label(&self) -> &'static str {
        match self {
            ResolveOutcome::Matched(_) => "matched",
            ResolveOutcome::NoMatch => "no_match",
            ResolveOutcome::MissingKey => "missing_key",
            ResolveOutcome::Failed(_) => "failed",
        }
    }

    /// True when the empty result does not come from a real search
    pub fn is_degraded(&self) -> bool {
        matches!(self, ResolveOutcome::MissingKey | ResolveOutcome::Failed(_))
    }

    pub fn into_suggestions(self) -> Vec<String> {
        match self {
            ResolveOutcome::Matched(suggestions) => suggestions,
            _ => Vec::new(),
        }
    }
}
