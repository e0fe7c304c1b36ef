use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfarer_core::error::CoreError;
use wayfarer_gemini::GeminiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wayfarer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure from the generation service.
    #[error("Generation error: {0}")]
    Generation(#[from] GeminiError),

    /// The caller already has a trip submission in flight.
    #[error("A trip submission is already in progress for this account")]
    AlreadyInFlight,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Generation errors ---
            AppError::Generation(err) => classify_gemini_error(err),

            // --- Duplicate submission ---
            AppError::AlreadyInFlight => (
                StatusCode::CONFLICT,
                "SUBMISSION_IN_FLIGHT",
                self.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a generation failure into an HTTP status, error code, and message.
///
/// - Missing API key maps to 503: the service is misconfigured, not broken.
/// - Quota / rate-limit rejections map to 429 with a distinct message.
/// - Everything else maps to 502 with the underlying error text included,
///   since the failure belongs to the upstream service.
fn classify_gemini_error(err: &GeminiError) -> (StatusCode, &'static str, String) {
    if matches!(err, GeminiError::MissingApiKey) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "GENERATION_NOT_CONFIGURED",
            "Itinerary generation is not configured: GEMINI_API_KEY is not set".to_string(),
        );
    }
    if err.is_quota_exceeded() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            "QUOTA_EXCEEDED",
            "Itinerary generation quota exceeded. Please try again later.".to_string(),
        );
    }
    tracing::error!(error = %err, "Generation failed");
    (
        StatusCode::BAD_GATEWAY,
        "GENERATION_FAILED",
        format!("Failed to generate itinerary: {err}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_gets_distinct_message() {
        let err = GeminiError::Api {
            status: 429,
            body: "slow down".to_string(),
        };
        let (status, code, message) = classify_gemini_error(&err);
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(code, "QUOTA_EXCEEDED");
        assert!(message.contains("quota exceeded"));
    }

    #[test]
    fn generic_generation_error_includes_underlying_text() {
        let err = GeminiError::Api {
            status: 500,
            body: "model overloaded".to_string(),
        };
        let (status, code, message) = classify_gemini_error(&err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "GENERATION_FAILED");
        assert!(message.contains("model overloaded"));
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let (status, code, _) = classify_gemini_error(&GeminiError::MissingApiKey);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "GENERATION_NOT_CONFIGURED");
    }
}
