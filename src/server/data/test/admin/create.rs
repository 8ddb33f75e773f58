use super::*;

/// Tests seeding an admin account and looking it up by username.
///
/// Expected: Ok with the username reported as existing only after creation
#[tokio::test]
async fn creates_admin_and_reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert!(!repo.exists_by_username("warden").await?);

    let admin = repo.create("warden", "secret").await?;

    assert_eq!(admin.username, "warden");
    assert!(admin.id > 0);
    assert!(repo.exists_by_username("warden").await?);
    assert!(!repo.exists_by_username("Warden").await?);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::create_admin_with_credentials(db, "warden", "one").await?;

    let result = AdminRepository::new(db).create("warden", "two").await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
