use crate::error::Result;
use crate::metrics::{
    SUGGEST_INDEX_SIZE_BYTES, SUGGEST_REQUESTS_TOTAL, SUGGEST_REQUEST_DURATION_SECONDS,
};
use crate::search::SuggestionIndex;
use crate::store::IndexStore;
use crate::suggest::{ResolveOutcome, SuggestOptions, SuggestionCollection};
use std::sync::Arc;

/// Resolves suggestions against a shared index store
#[derive(Clone)]
pub struct SuggestionResolver {
    store: Arc<dyn IndexStore>,
    defaults: SuggestOptions,
}

impl SuggestionResolver {
    pub fn new(store: Arc<dyn IndexStore>) -> Self {
        Self {
            store,
            defaults: SuggestOptions::default(),
        }
    }

    /// Options used when a call passes `None`
    pub fn with_defaults(mut self, defaults: SuggestOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &SuggestOptions {
        &self.defaults
    }

    pub async fn resolve(
        &self,
        facet_type: &str,
        query: &str,
        options: Option<SuggestOptions>,
    ) -> SuggestionCollection {
        resolve(
            self.store.as_ref(),
            facet_type,
            query,
            Some(options.unwrap_or(self.defaults)),
        )
        .await
    }

    pub async fn resolve_outcome(
        &self,
        facet_type: &str,
        query: &str,
        options: Option<SuggestOptions>,
    ) -> ResolveOutcome {
        let options = options.unwrap_or(self.defaults);
        resolve_outcome(self.store.as_ref(), facet_type, query, options).await
    }
}

/// Return the suggestions for `query` from the index stored under `facet_type`
///
/// Never fails: every error is logged and yields an empty list. The `type`
/// of the returned collection is always `facet_type`.
pub async fn resolve(
    store: &dyn IndexStore,
    facet_type: &str,
    query: &str,
    options: Option<SuggestOptions>,
) -> SuggestionCollection {
    let outcome = resolve_outcome(store, facet_type, query, options.unwrap_or_default()).await;

    SuggestionCollection {
        suggestions: outcome.into_suggestions(),
        facet_type: facet_type.to_string(),
    }
}

/// Like [`resolve`], but reports why the list is empty
pub async fn resolve_outcome(
    store: &dyn IndexStore,
    facet_type: &str,
    query: &str,
    options: SuggestOptions,
) -> ResolveOutcome {
    let timer = SUGGEST_REQUEST_DURATION_SECONDS.start_timer();

    let outcome = match lookup(store, facet_type, query, &options).await {
        Ok(Some(suggestions)) if suggestions.is_empty() => ResolveOutcome::NoMatch,
        Ok(Some(suggestions)) => ResolveOutcome::Matched(suggestions),
        Ok(None) => {
            tracing::error!(facet_type = %facet_type, "No redis key [{}] found", facet_type);
            ResolveOutcome::MissingKey
        }
        Err(err) => {
            tracing::error!(
                facet_type = %facet_type,
                error_kind = err.kind(),
                "An error occurred accessing redis: {}",
                err
            );
            ResolveOutcome::Failed(err)
        }
    };

    timer.observe_duration();
    SUGGEST_REQUESTS_TOTAL
        .with_label_values(&[outcome.label()])
        .inc();

    outcome
}

/// `Ok(None)` when there is no usable payload under the key
async fn lookup(
    store: &dyn IndexStore,
    facet_type: &str,
    query: &str,
    options: &SuggestOptions,
) -> Result<Option<Vec<String>>> {
    let Some(payload) = store.get_index(facet_type).await? else {
        return Ok(None);
    };

    // An empty value is treated like an absent key
    if payload.is_empty() {
        return Ok(None);
    }

    SUGGEST_INDEX_SIZE_BYTES.observe(payload.len() as f64);

    let index = SuggestionIndex::import(&payload)?;
    let suggestions = index.search(query, options.limit, options.mode)?;

    Ok(Some(suggestions))
}
