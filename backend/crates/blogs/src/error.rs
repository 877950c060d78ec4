//! Blogs Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::BlogId;

pub type BlogsResult<T> = Result<T, BlogsError>;

#[derive(Debug, Error)]
pub enum BlogsError {
    /// Request data failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Blog with ID {0} does not exist in the database")]
    BlogNotFound(BlogId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogsError::Validation(_) => ErrorKind::BadRequest,
            BlogsError::BlogNotFound(_) => ErrorKind::NotFound,
            BlogsError::Database(_) | BlogsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            BlogsError::Database(err) => AppError::from(err),
            BlogsError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for BlogsError {
    fn into_response(self) -> Response {
        match &self {
            BlogsError::Database(e) => tracing::error!(error = %e, "Blogs database error"),
            BlogsError::Internal(msg) => tracing::error!(message = %msg, "Blogs internal error"),
            _ => tracing::debug!(error = %self, "Blogs error"),
        }
        self.into_app_error().into_response()
    }
}

impl From<AppError> for BlogsError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            BlogsError::Validation(err.message().to_string())
        } else {
            BlogsError::Internal(err.to_string())
        }
    }
}
