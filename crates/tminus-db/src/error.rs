use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Migration error: {0}")]
    MigrationError(String),

    /// The store rejected an insert because the slug is already taken.
    #[error("Slug already in use: {0}")]
    UniqueViolation(String),

    #[error("Unsupported database URL: {0}")]
    UnsupportedUrl(String),

    #[error(transparent)]
    CoreError(#[from] tminus_core::error::CoreError),
}

impl DbError {
    /// ## Summary
    /// Maps an insert failure, turning a unique-constraint rejection into
    /// `DbError::UniqueViolation` for the given slug.
    #[must_use]
    pub fn from_insert(err: diesel::result::Error, slug: &str) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Self::UniqueViolation(slug.to_string()),
            other => Self::DatabaseError(other),
        }
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;
