use thiserror::Error;

/// Errors raised while fetching, importing or searching a suggestion index
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Cache store errors (connection refused, command failure, ...)
    #[error("Store error: {0}")]
    Store(String),

    /// The serialized index could not be decoded or opened
    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    /// Query construction or execution failed
    #[error("Search failed: {0}")]
    Search(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SuggestError {
    /// Short, stable label used for metrics and structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            SuggestError::Store(_) => "store",
            SuggestError::MalformedIndex(_) => "malformed_index",
            SuggestError::Search(_) => "search",
            SuggestError::Configuration(_) => "configuration",
            SuggestError::Io(_) => "io",
        }
    }
}

impl From<redis::RedisError> for SuggestError {
    fn from(err: redis::RedisError) -> Self {
        SuggestError::Store(err.to_string())
    }
}

impl From<tantivy::TantivyError> for SuggestError {
    fn from(err: tantivy::TantivyError) -> Self {
        SuggestError::Search(err.to_string())
    }
}

impl From<bincode::Error> for SuggestError {
    fn from(err: bincode::Error) -> Self {
        SuggestError::MalformedIndex(err.to_string())
    }
}

impl From<config::ConfigError> for SuggestError {
    fn from(err: config::ConfigError) -> Self {
        SuggestError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SuggestError>;
