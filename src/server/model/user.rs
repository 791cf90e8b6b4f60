//! User domain models and parameters.
//!
//! Accounts carry a role and an optional link to the teacher record they act for.
//! The password hash never leaves the repository layer except through
//! `UserCredentials`, which the login flow uses to verify a password.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{PaginatedUsersDto, ProfileDto, RegisterDto, UpdateUserDto, UserDto},
    server::{
        model::{school::School, teacher::Teacher, Page},
        util::sanitize::sanitize_opt,
    },
};

/// Application account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    /// Teacher record this account acts for, if any.
    pub teacher_id: Option<i32>,
    /// Inactive accounts cannot log in or pass the auth guard.
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
            full_name: self.full_name,
            teacher_id: self.teacher_id,
            is_active: self.is_active,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            full_name: entity.full_name,
            teacher_id: entity.teacher_id,
            is_active: entity.is_active,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }
}

/// A user together with the stored password hash, used only to verify logins.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// The logged-in user with the linked teacher and that teacher's school.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub teacher: Option<Teacher>,
    pub school: Option<School>,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user: self.user.into_dto(),
            teacher: self.teacher.map(|t| t.into_summary_dto()),
            school: self.school.map(|s| s.into_summary_dto()),
        }
    }
}

impl Page<User> {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.items.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub teacher_id: Option<i32>,
}

impl CreateUserParam {
    /// Builds insert parameters from a registration request and the hashed password.
    ///
    /// The email is trimmed and lower-cased so lookups at login are case-insensitive.
    pub fn from_dto(dto: RegisterDto, password_hash: String) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password_hash,
            role: dto.role,
            full_name: sanitize_opt(dto.full_name),
            teacher_id: dto.teacher_id,
        }
    }
}

/// Partial update of an account; `None` leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub role: Option<UserRole>,
    pub full_name: Option<String>,
    pub teacher_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateUserParam {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            role: dto.role,
            full_name: sanitize_opt(dto.full_name),
            teacher_id: dto.teacher_id,
            is_active: dto.is_active,
        }
    }
}

/// Canonical form of an email used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
