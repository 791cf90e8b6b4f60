//! Authentication service.
//!
//! Password login against argon2 hashes, admin-driven registration, and the one-time
//! setup flow that creates the first ADMIN account. Session handling stays in the
//! controller; this service only decides who the caller is.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, SetupDto},
    server::{
        data::{teacher::TeacherRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::{normalize_email, CreateUserParam, Profile, User},
        service::setup_code::SetupCodeService,
        util::{
            parse::validate_email,
            password::{
                hash_password_blocking, validate_password_strength, verify_password_blocking,
            },
            sanitize::sanitize_opt,
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and stamps the login time.
    ///
    /// Unknown email, inactive account, and wrong password all produce the same error.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The authenticated user with their teacher and school
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Login rejected
    pub async fn login(&self, dto: LoginDto) -> Result<Profile, AppError> {
        let repo = UserRepository::new(self.db);
        let email = normalize_email(&dto.email);

        // Every rejection path runs one argon2 verify so timing does not reveal
        // which emails are registered.
        let credentials = repo.find_credentials_by_email(&email).await?;
        let stored_hash = credentials.as_ref().map(|c| c.password_hash.clone());
        let password_ok = verify_password_blocking(dto.password, stored_hash).await?;

        let Some(credentials) = credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !credentials.user.is_active || !password_ok {
            return Err(AuthError::InvalidCredentials.into());
        }

        repo.update_last_login(credentials.user.id).await?;
        let user = repo
            .find_by_id(credentials.user.id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(credentials.user.id))?;

        tracing::info!("User {} logged in", user.id);

        self.profile(user).await
    }

    /// Loads the linked teacher and school for a user.
    pub async fn profile(&self, user: User) -> Result<Profile, AppError> {
        let Some(teacher_id) = user.teacher_id else {
            return Ok(Profile {
                user,
                teacher: None,
                school: None,
            });
        };

        let linked = TeacherRepository::new(self.db)
            .find_with_school(teacher_id)
            .await?;

        Ok(match linked {
            Some(row) => Profile {
                user,
                teacher: Some(row.teacher),
                school: Some(row.school),
            },
            None => Profile {
                user,
                teacher: None,
                school: None,
            },
        })
    }

    /// Creates an account on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Invalid email or weak password
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::NotFound)` - Linked teacher does not exist
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = normalize_email(&dto.email);
        validate_email(&email)?;
        validate_password_strength(&dto.password)?;

        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if let Some(teacher_id) = dto.teacher_id {
            if !TeacherRepository::new(self.db).exists(teacher_id).await? {
                return Err(AppError::NotFound(format!(
                    "Teacher with ID {} not found",
                    teacher_id
                )));
            }
        }

        let password_hash = hash_password_blocking(dto.password.clone()).await?;
        let user = repo
            .create(CreateUserParam::from_dto(dto, password_hash))
            .await?;

        tracing::info!("Registered user {} with role {:?}", user.id, user.role);

        Ok(user)
    }

    /// Redeems the startup setup code to create the first ADMIN account.
    ///
    /// The admin check runs before the code is consumed, so a request made after setup
    /// finished cannot burn a freshly generated code.
    ///
    /// # Returns
    /// - `Ok(User)` - The new admin
    /// - `Err(AuthError::AdminAlreadyExists)` - An admin account exists
    /// - `Err(AuthError::InvalidSetupCode)` - Code wrong, expired, or already used
    pub async fn setup(&self, codes: &SetupCodeService, dto: SetupDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Err(AuthError::AdminAlreadyExists.into());
        }

        let email = normalize_email(&dto.email);
        validate_email(&email)?;
        validate_password_strength(&dto.password)?;

        if !codes.validate_and_consume(&dto.code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let password_hash = hash_password_blocking(dto.password.clone()).await?;
        let user = repo
            .create(CreateUserParam {
                email,
                password_hash,
                role: UserRole::Admin,
                full_name: sanitize_opt(dto.full_name),
                teacher_id: None,
            })
            .await?;

        tracing::info!("Created initial admin account {}", user.id);

        Ok(user)
    }
}
