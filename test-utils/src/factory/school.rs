//! School factory for creating test school entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::Region;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let school = SchoolFactory::new(&db)
///     .province("Chiang Mai")
///     .region(Region::North)
///     .build()
///     .await?;
/// ```
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    school_name: String,
    province: String,
    region: Region,
    school_size: String,
    area_type: String,
    student_total: i32,
    quality_school_flag: bool,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values.
    ///
    /// Defaults:
    /// - school_name: `"School {id}"`
    /// - province: `"Nan"`
    /// - region: `NORTH`
    /// - school_size: `"SMALL"`, area_type: `"RURAL"`
    /// - student_total: `120`
    /// - quality_school_flag: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            school_name: format!("School {}", id),
            province: "Nan".to_string(),
            region: Region::North,
            school_size: "SMALL".to_string(),
            area_type: "RURAL".to_string(),
            student_total: 120,
            quality_school_flag: false,
        }
    }

    /// Sets the school name.
    pub fn school_name(mut self, school_name: impl Into<String>) -> Self {
        self.school_name = school_name.into();
        self
    }

    /// Sets the province.
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the school size classification.
    pub fn school_size(mut self, school_size: impl Into<String>) -> Self {
        self.school_size = school_size.into();
        self
    }

    /// Sets the quality-school flag.
    pub fn quality_school_flag(mut self, flag: bool) -> Self {
        self.quality_school_flag = flag;
        self
    }

    /// Builds and inserts the school entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - Created school entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        let now = Utc::now();
        entity::school::ActiveModel {
            school_name: ActiveValue::Set(self.school_name),
            province: ActiveValue::Set(self.province),
            region: ActiveValue::Set(self.region),
            school_size: ActiveValue::Set(self.school_size),
            area_type: ActiveValue::Set(self.area_type),
            student_total: ActiveValue::Set(self.student_total),
            director_name: ActiveValue::Set(None),
            quality_school_flag: ActiveValue::Set(self.quality_school_flag),
            community_context: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
