//! Searchable suggestion index

use crate::error::{Result, SuggestError};
use crate::search::query::build_query;
use crate::search::snapshot::IndexSnapshot;
use crate::search::SearchMode;
use std::collections::HashSet;
use tantivy::collector::TopDocs;
use tantivy::schema::{Field, Schema, Value, STORED, TEXT};
use tantivy::tokenizer::TokenStream;
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};

/// Name of the single indexed and stored field
pub const VALUE_FIELD: &str = "value";

/// Writer heap size in bytes (50MB)
const WRITER_HEAP_SIZE: usize = 50_000_000;

/// An in-memory suggestion index for a single facet
pub struct SuggestionIndex {
    index: Index,
    reader: IndexReader,
    value_field: Field,
}

impl SuggestionIndex {
    /// Build an index holding one document per distinct, non-blank value
    pub fn build<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut schema_builder = Schema::builder();
        let value_field = schema_builder.add_text_field(VALUE_FIELD, TEXT | STORED);
        let index = Index::create_in_ram(schema_builder.build());

        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_HEAP_SIZE)?;
        let mut seen = HashSet::new();

        for value in values {
            let value = value.as_ref();
            if value.trim().is_empty() || !seen.insert(value.to_string()) {
                continue;
            }
            writer.add_document(doc!(value_field => value))?;
        }

        writer.commit()?;
        writer.wait_merging_threads()?;

        tracing::debug!(documents = seen.len(), "Built suggestion index");

        Self::from_index(index)
    }

    /// Reconstruct an index from bytes produced by [`SuggestionIndex::export`]
    pub fn import(bytes: &[u8]) -> Result<Self> {
        let snapshot = IndexSnapshot::decode(bytes)?;
        let index = snapshot.restore()?;

        // Anything failing past this point means the payload was not a suggestion index
        Self::from_index(index).map_err(|err| match err {
            SuggestError::Search(msg) => SuggestError::MalformedIndex(msg),
            other => other,
        })
    }

    fn from_index(index: Index) -> Result<Self> {
        let value_field = index.schema().get_field(VALUE_FIELD).map_err(|_| {
            SuggestError::MalformedIndex(format!("Index has no '{}' field", VALUE_FIELD))
        })?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self {
            index,
            reader,
            value_field,
        })
    }

    /// Serialize the committed index
    pub fn export(&self) -> Result<Vec<u8>> {
        IndexSnapshot::capture(&self.index)?.encode()
    }

    /// Number of indexed values
    pub fn len(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return at most `limit` stored values matching `query`, best first
    pub fn search(&self, query: &str, limit: usize, mode: SearchMode) -> Result<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let tokens = self.tokenize(query)?;
        let Some(tantivy_query) = build_query(self.value_field, &tokens, mode)? else {
            return Ok(Vec::new());
        };

        let searcher = self.reader.searcher();
        let top_docs = searcher
            .search(&*tantivy_query, &TopDocs::with_limit(limit))
            .map_err(|e| SuggestError::Search(format!("Search execution failed: {}", e)))?;

        let mut suggestions = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let retrieved_doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| SuggestError::Search(format!("Failed to retrieve doc: {}", e)))?;

            if let Some(value) = retrieved_doc
                .get_first(self.value_field)
                .and_then(|v| v.as_str())
            {
                suggestions.push(value.to_string());
            }
        }

        Ok(suggestions)
    }

    /// Split `query` with the same analyzer the field was indexed with
    fn tokenize(&self, query: &str) -> Result<Vec<String>> {
        let mut analyzer = self.index.tokenizer_for_field(self.value_field)?;
        let mut stream = analyzer.token_stream(query);

        let mut tokens = Vec::new();
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }

        Ok(tokens)
    }
}
