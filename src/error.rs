//! Error types for the REST API.

use crate::db::BuildError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// API error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// API error types.
///
/// Every variant ends the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not a valid JSON payload for the operation.
    #[error("error decoding payload: {0}")]
    InvalidBody(String),

    /// Path parameter or payload content failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No stock matches the id.
    #[error("stock not found: {0}")]
    StockNotFound(i64),

    /// Statement could not be rendered.
    #[error("internal sql error: {0}")]
    QueryBuild(#[from] BuildError),

    /// Statement failed to execute.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StockNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::QueryBuild(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the caller. Internal causes stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            ApiError::QueryBuild(_) => "internal sql error".to_string(),
            ApiError::Database(_) => "error executing statement".to_string(),
            _ => self.to_string(),
        }
    }

    /// Extra context for row decode failures, which come from a table whose
    /// column types differ from `stockid BIGINT, price DOUBLE PRECISION`.
    #[must_use]
    pub fn schema_hint(&self) -> Option<&'static str> {
        match self {
            ApiError::Database(sqlx::Error::ColumnDecode { .. }) => {
                Some("stocks.stockid must be BIGINT and stocks.price DOUBLE PRECISION")
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, hint = self.schema_hint(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
