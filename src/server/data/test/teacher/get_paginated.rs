use super::*;

/// Tests filtering teachers by their school's region.
///
/// Expected: Ok with only the teacher whose school is in the north-east
#[tokio::test]
async fn filters_by_school_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let north = factory::school::SchoolFactory::new(db)
        .region(Region::North)
        .build()
        .await?;
    let northeast = factory::school::SchoolFactory::new(db)
        .region(Region::Northeast)
        .build()
        .await?;
    factory::create_teacher(db, north.id).await?;
    let wanted = factory::create_teacher(db, northeast.id).await?;

    let repo = TeacherRepository::new(db);
    let (teachers, total) = repo
        .get_paginated(&TeacherFilter {
            region: Some(Region::Northeast),
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(teachers[0].teacher.id, wanted.id);
    assert_eq!(teachers[0].school.id, northeast.id);

    Ok(())
}

/// Tests searching by a substring of the full name combined with a status filter.
///
/// Expected: Ok with the single active match
#[tokio::test]
async fn searches_name_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Malee Srisuk")
        .build()
        .await?;
    factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Malee Thongdee")
        .status(TeacherStatus::Resigned)
        .build()
        .await?;
    factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Niran Chai")
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    let (teachers, total) = repo
        .get_paginated(&TeacherFilter {
            search: Some("Malee".to_string()),
            status: Some(TeacherStatus::Active),
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(teachers[0].teacher.full_name, "Malee Srisuk");

    Ok(())
}
