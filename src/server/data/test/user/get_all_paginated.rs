use super::*;

/// Tests paging through users ordered by email.
///
/// Verifies that the total reflects every user while the page only holds
/// `per_page` entries, starting from the alphabetically first email.
///
/// Expected: Ok with 2 users on page 0 and a total of 3
#[tokio::test]
async fn pages_users_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for email in ["c@example.com", "a@example.com", "b@example.com"] {
        factory::user::UserFactory::new(db).email(email).build().await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "a@example.com");
    assert_eq!(users[1].email, "b@example.com");

    let (last_page, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].email, "c@example.com");

    Ok(())
}
