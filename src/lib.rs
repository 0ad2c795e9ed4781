//! Facet autocomplete suggestions served from serialized search indexes.
//!
//! Each facet type (instrument, platform, ...) has a pre-built index stored
//! in a key-value store under the facet name. [`suggest::resolve`] fetches
//! it, imports it and returns the top matches for a query, degrading to an
//! empty list on any failure.

pub mod config;
pub mod error;
pub mod metrics;
pub mod search;
pub mod store;
pub mod suggest;

pub use error::{Result, SuggestError};
pub use search::{SearchMode, SuggestionIndex};
pub use store::IndexStore;
pub use suggest::{resolve, SuggestOptions, SuggestionCollection, SuggestionResolver};
