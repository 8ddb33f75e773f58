use super::*;

/// Tests finding an admin with matching username and password.
///
/// Expected: Ok(Some) with the stored admin
#[tokio::test]
async fn finds_admin_with_exact_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::create_admin_with_credentials(db, "warden", "secret").await?;

    let found = AdminRepository::new(db)
        .find_by_credentials("warden", "secret")
        .await?;

    assert_eq!(found.map(|a| a.id), Some(admin.id));

    Ok(())
}

/// Tests that a wrong password or unknown username does not match.
///
/// Expected: Ok(None) for each mismatch
#[tokio::test]
async fn returns_none_for_mismatched_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::create_admin_with_credentials(db, "warden", "secret").await?;
    let repo = AdminRepository::new(db);

    assert!(repo.find_by_credentials("warden", "wrong").await?.is_none());
    assert!(repo.find_by_credentials("nobody", "secret").await?.is_none());
    assert!(repo.find_by_credentials("warden", "SECRET").await?.is_none());

    Ok(())
}
