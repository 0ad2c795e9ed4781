//! Query construction for suggestion lookups

use crate::error::{Result, SuggestError};
use crate::search::SearchMode;
use tantivy::query::{BooleanQuery, Occur, Query, RegexQuery, TermQuery};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::Term;

/// Build the query for already-tokenized input. `None` when there is nothing to match.
pub(crate) fn build_query(
    field: Field,
    tokens: &[String],
    mode: SearchMode,
) -> Result<Option<Box<dyn Query>>> {
    let Some((last, leading)) = tokens.split_last() else {
        return Ok(None);
    };

    let mut clauses: Vec<(Occur, Box<dyn Query>)> = leading
        .iter()
        .map(|token| (Occur::Must, term_query(field, token)))
        .collect();

    let last_clause = match mode {
        SearchMode::Speed => term_query(field, last),
        SearchMode::Match => prefix_query(field, last)?,
    };
    clauses.push((Occur::Must, last_clause));

    if clauses.len() == 1 {
        return Ok(clauses.pop().map(|(_, query)| query));
    }

    Ok(Some(Box::new(BooleanQuery::new(clauses))))
}

fn term_query(field: Field, token: &str) -> Box<dyn Query> {
    Box::new(TermQuery::new(
        Term::from_field_text(field, token),
        IndexRecordOption::WithFreqs,
    ))
}

fn prefix_query(field: Field, token: &str) -> Result<Box<dyn Query>> {
    let pattern = format!("{}.*", regex::escape(token));
    let query = RegexQuery::from_pattern(&pattern, field).map_err(|e| {
        SuggestError::Search(format!("Invalid prefix pattern for '{}': {}", token, e))
    })?;
    Ok(Box::new(query))
}
