use thiserror::Error;

/// Errors raised by repositories and units of work
#[derive(Error, Debug)]
pub enum DbError {
    /// A staged update or delete no longer matched its row when committing
    #[error("Concurrent update detected for {entity} {id}")]
    ConcurrencyConflict { entity: &'static str, id: String },

    #[error("Transaction has been consumed")]
    TransactionConsumed,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to serialize data for hashing: {0}")]
    Serialization(String),

    #[error("Failed to decode row: {0}")]
    Decode(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    pub fn concurrency_conflict(entity: &'static str, id: impl ToString) -> Self {
        DbError::ConcurrencyConflict {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, DbError::ConcurrencyConflict { .. })
    }
}

pub type DbResult<T> = Result<T, DbError>;
