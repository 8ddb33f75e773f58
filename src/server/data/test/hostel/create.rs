use super::*;

/// Tests creating a new hostel.
///
/// Expected: Ok with hostel created
#[tokio::test]
async fn creates_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HostelRepository::new(db);
    let hostel = repo
        .create(CreateHostelParams {
            name: "Block A".to_string(),
            address: Some("North campus".to_string()),
        })
        .await?;

    assert!(hostel.id > 0);
    assert_eq!(hostel.name, "Block A");
    assert_eq!(hostel.address.as_deref(), Some("North campus"));

    Ok(())
}

/// Tests that hostel names are unique.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hostel::HostelFactory::new(db)
        .name("Block A")
        .build()
        .await?;

    let result = HostelRepository::new(db)
        .create(CreateHostelParams {
            name: "Block A".to_string(),
            address: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that names differing only in letter case collide.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hostel::HostelFactory::new(db)
        .name("Block A")
        .build()
        .await?;

    let result = HostelRepository::new(db)
        .create(CreateHostelParams {
            name: "BLOCK a".to_string(),
            address: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
