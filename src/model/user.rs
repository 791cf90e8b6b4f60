use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{school::SchoolSummaryDto, teacher::TeacherSummaryDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub teacher_id: Option<i32>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// The logged-in user with their linked teacher and school, when present.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub teacher: Option<TeacherSummaryDto>,
    pub school: Option<SchoolSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub teacher_id: Option<i32>,
}

/// Redeems the startup setup code to create the first admin account.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SetupDto {
    pub code: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub role: Option<UserRole>,
    pub full_name: Option<String>,
    pub teacher_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
