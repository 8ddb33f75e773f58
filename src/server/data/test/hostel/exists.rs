use super::*;

/// Tests hostel existence checks.
///
/// Expected: true for a stored hostel, false for an unknown id
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::create_hostel(db).await?;
    let repo = HostelRepository::new(db);

    assert!(repo.exists(hostel.id).await?);
    assert!(!repo.exists(hostel.id + 1000).await?);

    Ok(())
}
