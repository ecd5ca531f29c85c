use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] tminus_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] tminus_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No free slug could be allocated")]
    SlugSpaceExhausted,
}

impl ServiceError {
    /// True for failures caused by the caller's input rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::CoreError(
                    tminus_core::error::CoreError::ValidationError(_)
                        | tminus_core::error::CoreError::InvalidTimeFormat(_)
                )
        )
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::CoreError(tminus_core::error::CoreError::NotFound(_))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
