//! Role-based access guard.
//!
//! Every protected handler starts with `AuthGuard::new(&state.db, &session).require(..)`.
//! The guard resolves the session user, rejects inactive accounts, and checks each
//! requested permission against the user's role.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Role sets accepted by protected endpoints.
#[derive(Debug, Clone, Copy)]
pub enum Permission {
    /// ADMIN only.
    Admin,
    /// ADMIN or PROJECT_MANAGER.
    Manager,
    /// ADMIN, PROJECT_MANAGER, or MENTOR.
    Reviewer,
    /// TEACHER, ADMIN, or PROJECT_MANAGER.
    Uploader,
    /// TEACHER or ADMIN.
    EvidenceDeleter,
}

impl Permission {
    /// Whether `role` satisfies this permission.
    pub fn allows(self, role: UserRole) -> bool {
        use UserRole::*;

        match self {
            Permission::Admin => matches!(role, Admin),
            Permission::Manager => matches!(role, Admin | ProjectManager),
            Permission::Reviewer => matches!(role, Admin | ProjectManager | Mentor),
            Permission::Uploader => matches!(role, Teacher | Admin | ProjectManager),
            Permission::EvidenceDeleter => matches!(role, Teacher | Admin),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission in `permissions`.
    ///
    /// An empty slice only requires an authenticated, active user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user deleted or deactivated
    /// - `Err(AuthError::AccessDenied)` - Role does not satisfy a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user = match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(user) if user.is_active => user,
            _ => return Err(AuthError::UserNotInDatabase(user_id).into()),
        };

        for permission in permissions {
            if !permission.allows(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("role {:?} lacks {:?} permission", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}
