use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists or was deactivated.
    ///
    /// Results in a 401 Unauthorized response so the client logs in again.
    #[error("User {0} from session is missing or inactive")]
    UserNotInDatabase(i32),

    /// Unknown email, wrong password, or inactive account at login.
    ///
    /// All three collapse to the same message so the response does not reveal
    /// which accounts exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - The user id
    /// - A description of the denied action, logged server side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The first-admin setup code is wrong, expired, or already used.
    #[error("Invalid or expired setup code")]
    InvalidSetupCode,

    /// Setup was attempted after an admin account already exists.
    #[error("An admin account already exists")]
    AdminAlreadyExists,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid credentials"
/// - `InvalidSetupCode` → 401 with "Invalid or expired setup code"
/// - `AccessDenied` → 403 with "Insufficient permissions"
/// - `AdminAlreadyExists` → 403 with "Setup has already been completed"
///
/// All errors are logged at warn level with their detailed message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::InvalidSetupCode => (StatusCode::UNAUTHORIZED, "Invalid or expired setup code"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::AdminAlreadyExists => (StatusCode::FORBIDDEN, "Setup has already been completed"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
