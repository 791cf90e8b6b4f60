use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, ProfileDto, RegisterDto, SetupDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials, records the login time and stores the user id in a
/// freshly cycled session.
///
/// # Access Control
/// - Public, rate-limited per client IP
///
/// # Returns
/// - `200 OK` - Profile of the logged-in user
/// - `401 Unauthorized` - Unknown email, wrong password, or inactive account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ProfileDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthService::new(&state.db).login(payload).await?;

    AuthSession::new(&session)
        .set_user_id(profile.user.id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Log out and delete the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the current user's profile.
///
/// Includes the linked teacher record and that teacher's school when present.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = AuthService::new(&state.db).profile(user).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Register a new user account.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Arguments
/// - `payload` - Email, password, role, and optional name and teacher link
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid email or weak password
/// - `404 Not Found` - Linked teacher does not exist
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid email or weak password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = AuthService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Create the first admin account with the one-time setup code.
///
/// The code is printed to the server log at startup when no admin exists and is
/// consumed on successful use.
///
/// # Access Control
/// - Public, rate-limited per client IP
///
/// # Returns
/// - `201 Created` - The admin account
/// - `401 Unauthorized` - Invalid or expired setup code
/// - `403 Forbidden` - An admin already exists
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "Admin account created", body = UserDto),
        (status = 400, description = "Invalid email or weak password", body = ErrorDto),
        (status = 401, description = "Invalid or expired setup code", body = ErrorDto),
        (status = 403, description = "Admin already exists", body = ErrorDto),
        (status = 429, description = "Too many attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .setup(&state.setup_code_service, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
