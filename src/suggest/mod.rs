//! Suggestion resolution
//!
//! Looks up the serialized index stored under a facet type, imports it and
//! returns the best matches for a query. Lookups never fail: a missing key,
//! a store error or a corrupt payload is logged and turns into an empty
//! suggestion list.
//!
//! # Example
//!
//! ```no_run
//! use autocomplete_suggest::store::InMemoryIndexStore;
//! use autocomplete_suggest::suggest::{resolve, SuggestOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = InMemoryIndexStore::new();
//!     let collection = resolve(&store, "platform", "aqua", None).await;
//!     assert!(collection.suggestions.is_empty());
//!     assert_eq!(collection.facet_type, "platform");
//!
//!     let options = SuggestOptions::new().with_limit(1);
//!     let _ = resolve(&store, "instrument", "MODIS", Some(options)).await;
//! }
//! ```

mod options;
mod outcome;
mod resolver;

pub use options::{SuggestOptions, DEFAULT_LIMIT};
pub use outcome::{ResolveOutcome, SuggestionCollection};
pub use resolver::{resolve, resolve_outcome, SuggestionResolver};
