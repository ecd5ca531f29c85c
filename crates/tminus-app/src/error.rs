use salvo::http::StatusCode;
use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Writer, async_trait};
use serde::Serialize;
use thiserror::Error;

use tminus_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] tminus_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] tminus_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload for the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::ServiceError(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::CoreError(
                tminus_core::error::CoreError::ValidationError(_)
                | tminus_core::error::CoreError::InvalidTimeFormat(_),
            ) => StatusCode::BAD_REQUEST,
            Self::CoreError(tminus_core::error::CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Message safe to show the client. Server faults never leak details.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::BAD_REQUEST => match self {
                Self::ServiceError(ServiceError::ValidationError(message)) => message.clone(),
                other => other.to_string(),
            },
            StatusCode::NOT_FOUND => "Event not found.".to_string(),
            _ => "Internal server error.".to_string(),
        }
    }

    /// ## Summary
    /// Renders the error as a JSON body instead of plain text.
    pub fn render_json(&self, res: &mut Response) {
        self.log();
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            error: self.public_message(),
        }));
    }

    fn log(&self) {
        if self.status_code().is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        self.log();
        res.status_code(self.status_code());
        res.render(Text::Plain(self.public_message()));
    }
}
