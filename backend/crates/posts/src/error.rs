//! Posts Error Types
//!
//! Posts-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::PostId;

/// Posts-specific result type alias
pub type PostsResult<T> = Result<T, PostsError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostsError {
    /// Request data failed validation
    #[error("{0}")]
    Validation(String),

    /// No post with the given id
    #[error("Post with ID {0} does not exist in the database")]
    PostNotFound(PostId),

    /// No user owns the author email of a new post
    #[error("No user with email {0} exists in the database")]
    AuthorNotFound(String),

    /// Signup with an already registered email
    #[error("A user with email {0} already exists")]
    EmailTaken(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostsError::Validation(_) => ErrorKind::BadRequest,
            PostsError::PostNotFound(_) | PostsError::AuthorNotFound(_) => ErrorKind::NotFound,
            PostsError::EmailTaken(_) => ErrorKind::Conflict,
            PostsError::Database(_) | PostsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors keep the kernel's SQLSTATE mapping.
    pub fn into_app_error(self) -> AppError {
        match self {
            PostsError::Database(err) => AppError::from(err),
            PostsError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostsError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostsError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostsError::EmailTaken(email) => {
                tracing::warn!(email = %email, "Signup with existing email");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for PostsError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            PostsError::Validation(err.message().to_string())
        } else {
            PostsError::Internal(err.to_string())
        }
    }
}
