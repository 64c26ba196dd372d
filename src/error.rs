use thiserror::Error;

/// Errors raised by the fallible edges of the crate: the SQLite catalog
/// store and configuration loading. The scoring pipeline itself is total
/// and never returns an error.
#[derive(Debug, Error)]
pub enum ChargeScoutError {
    #[error("catalog database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid catalog metadata timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("invalid spec column: {0}")]
    SpecColumn(#[from] serde_json::Error),
}
