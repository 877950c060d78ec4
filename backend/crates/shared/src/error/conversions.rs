//! Error conversions - From implementations for common error types
//!
//! Conversions from database errors and axum extractor rejections into
//! [`AppError`], and the HTTP rendering of [`AppError`] itself.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23503") => AppError::conflict("Foreign key violation"),
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::new(
                        ErrorKind::UnprocessableEntity,
                        "Check constraint violation",
                    ),
                    Some("22001") => AppError::bad_request("Value too long"),
                    Some("42501") => AppError::forbidden("Insufficient privilege"),
                    Some("57014") => {
                        AppError::new(ErrorKind::RequestTimeout, "Database statement timed out")
                    }
                    Some("53000" | "53100" | "53200" | "53300" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

/// True when the error is a PostgreSQL unique-constraint violation.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server errors never leak the underlying cause
        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_conversion() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_renders_error_body() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("Post with ID 9 does not exist in the database")
            .into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }
}
