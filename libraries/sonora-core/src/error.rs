/// Core error types for Sonora
use thiserror::Error;

/// Result type alias using `SonoraError`
pub type Result<T> = std::result::Result<T, SonoraError>;

/// Core error type for Sonora
#[derive(Error, Debug)]
pub enum SonoraError {
    /// A required field was empty or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Every generated playlist id collided with an existing one
    #[error("Could not generate a unique playlist id after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SonoraError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SonoraError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::Duplicate(db.message().to_string())
            }
            sqlx::Error::RowNotFound => Self::not_found("Row", "unknown"),
            other => Self::Database(other.to_string()),
        }
    }
}
