//! String-backed enums shared by the entities and the API layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    #[sea_orm(string_value = "NORTH")]
    North,
    #[sea_orm(string_value = "NORTHEAST")]
    Northeast,
    #[sea_orm(string_value = "CENTRAL")]
    Central,
    #[sea_orm(string_value = "SOUTH")]
    South,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "TEACHER")]
    Teacher,
    #[sea_orm(string_value = "PRINCIPAL")]
    Principal,
    #[sea_orm(string_value = "MENTOR")]
    Mentor,
    #[sea_orm(string_value = "PROJECT_MANAGER")]
    ProjectManager,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeacherStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "TRANSFERRED")]
    Transferred,
    #[sea_orm(string_value = "RESIGNED")]
    Resigned,
    #[sea_orm(string_value = "ON_LEAVE")]
    OnLeave,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitType {
    #[sea_orm(string_value = "LESSON_STUDY")]
    LessonStudy,
    #[sea_orm(string_value = "COACHING")]
    Coaching,
    #[sea_orm(string_value = "OBSERVATION")]
    Observation,
    #[sea_orm(string_value = "FOLLOW_UP")]
    FollowUp,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetencyLevel {
    #[sea_orm(string_value = "NEEDS_SUPPORT")]
    NeedsSupport,
    #[sea_orm(string_value = "FAIR")]
    Fair,
    #[sea_orm(string_value = "GOOD")]
    Good,
    #[sea_orm(string_value = "EXCELLENT")]
    Excellent,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentPeriod {
    #[sea_orm(string_value = "BEFORE")]
    Before,
    #[sea_orm(string_value = "MIDTERM")]
    Midterm,
    #[sea_orm(string_value = "AFTER")]
    After,
    #[sea_orm(string_value = "QUARTERLY_1")]
    #[serde(rename = "QUARTERLY_1")]
    Quarterly1,
    #[sea_orm(string_value = "QUARTERLY_2")]
    #[serde(rename = "QUARTERLY_2")]
    Quarterly2,
    #[sea_orm(string_value = "QUARTERLY_3")]
    #[serde(rename = "QUARTERLY_3")]
    Quarterly3,
    #[sea_orm(string_value = "QUARTERLY_4")]
    #[serde(rename = "QUARTERLY_4")]
    Quarterly4,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelfAssessmentStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "REVIEWED")]
    Reviewed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceItemType {
    #[sea_orm(string_value = "FILE")]
    File,
    #[sea_orm(string_value = "VIDEO_LINK")]
    VideoLink,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceType {
    #[sea_orm(string_value = "LESSON_PLAN")]
    LessonPlan,
    #[sea_orm(string_value = "TEACHING_MEDIA")]
    TeachingMedia,
    #[sea_orm(string_value = "ASSESSMENT")]
    Assessment,
    #[sea_orm(string_value = "STUDENT_WORK")]
    StudentWork,
    #[sea_orm(string_value = "CLASSROOM_PHOTO")]
    ClassroomPhoto,
    #[sea_orm(string_value = "ACTION_RESEARCH")]
    ActionResearch,
    #[sea_orm(string_value = "CERTIFICATE")]
    Certificate,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetCategory {
    #[sea_orm(string_value = "MENTORING")]
    Mentoring,
    #[sea_orm(string_value = "PLC")]
    Plc,
    #[sea_orm(string_value = "TRAINING")]
    Training,
    #[sea_orm(string_value = "MATERIAL")]
    Material,
    #[sea_orm(string_value = "TRAVEL")]
    Travel,
    #[sea_orm(string_value = "ACCOMMODATION")]
    Accommodation,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "PRINTING")]
    Printing,
    #[sea_orm(string_value = "COMMUNICATION")]
    Communication,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentType {
    #[sea_orm(string_value = "DATA_COLLECTION")]
    DataCollection,
    #[sea_orm(string_value = "DATA_PROCESSING")]
    DataProcessing,
    #[sea_orm(string_value = "DATA_SHARING")]
    DataSharing,
    #[sea_orm(string_value = "MARKETING")]
    Marketing,
    #[sea_orm(string_value = "ANALYTICS")]
    Analytics,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "GRANTED")]
    Granted,
    #[sea_orm(string_value = "REVOKED")]
    Revoked,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

/// Assessment aspect an indicator belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorAspect {
    #[sea_orm(string_value = "PROFESSIONAL")]
    Professional,
    #[sea_orm(string_value = "SOCIAL")]
    Social,
    #[sea_orm(string_value = "PERSONAL")]
    Personal,
}
