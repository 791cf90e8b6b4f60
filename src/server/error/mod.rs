//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique-constraint violations become 409 Conflict, everything else is a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while storing or serving uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal fault such as a failed password hash.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Authenticated caller may not perform the operation on this resource.
    ///
    /// Results in 403 with the provided message. Used for ownership and workflow
    /// state checks; role checks go through `AuthError::AccessDenied`.
    #[error("{0}")]
    Forbidden(String),

    /// Request conflicts with existing data. Results in 409.
    #[error("{0}")]
    Conflict(String),

    /// Request body exceeds the upload limit. Results in 413.
    #[error("{0}")]
    PayloadTooLarge(String),
}

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at warn level with their message; server errors are logged
/// at error level with full details while the client only receives a generic message.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and unique-constraint database errors
/// - 413 Payload Too Large - For `PayloadTooLarge` variant
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => client_error(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => client_error(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => client_error(StatusCode::FORBIDDEN, msg),
            Self::Conflict(msg) => client_error(StatusCode::CONFLICT, msg),
            Self::PayloadTooLarge(msg) => client_error(StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::warn!("Unique constraint violation: {}", detail);
                    client_error(
                        StatusCode::CONFLICT,
                        "Resource already exists".to_string(),
                    )
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::warn!("Foreign key violation: {}", detail);
                    client_error(
                        StatusCode::BAD_REQUEST,
                        "Referenced record does not exist".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response for a 4xx status and logs it at warn level.
fn client_error(status: StatusCode, msg: String) -> Response {
    tracing::warn!("{} {}", status.as_u16(), msg);

    (status, Json(ErrorDto { error: msg })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
