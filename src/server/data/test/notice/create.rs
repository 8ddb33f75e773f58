use super::*;

/// Tests creating a hostel-scoped notice.
///
/// Expected: Ok with audience and hostel stored
#[tokio::test]
async fn creates_hostel_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::create_hostel(db).await?;

    let notice = NoticeRepository::new(db)
        .create(CreateNoticeParams {
            title: "Water cut".to_string(),
            body: "No water on Sunday".to_string(),
            audience: NoticeAudience::Hostel,
            hostel_id: Some(hostel.id),
        })
        .await?;

    assert!(notice.id > 0);
    assert_eq!(notice.audience, NoticeAudience::Hostel);
    assert_eq!(notice.hostel_id, Some(hostel.id));

    Ok(())
}
