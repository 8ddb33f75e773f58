use super::*;

/// Tests that a hostel notice is only visible to its own hostel.
///
/// Expected: excluded when filtering by another hostel, included for its own
#[tokio::test]
async fn filters_hostel_notices_by_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let x = factory::create_hostel(db).await?;
    let y = factory::create_hostel(db).await?;
    let scoped = factory::notice::NoticeFactory::new(db)
        .for_hostel(x.id)
        .build()
        .await?;
    let general = factory::create_notice(db).await?;

    let repo = NoticeRepository::new(db);

    let for_y: Vec<i32> = repo
        .get_visible(Some(y.id))
        .await?
        .iter()
        .map(|n| n.notice.id)
        .collect();
    assert_eq!(for_y, vec![general.id]);

    let for_x: Vec<i32> = repo
        .get_visible(Some(x.id))
        .await?
        .iter()
        .map(|n| n.notice.id)
        .collect();
    assert!(for_x.contains(&scoped.id));
    assert!(for_x.contains(&general.id));

    Ok(())
}

/// Tests listing without a filter.
///
/// Expected: every notice, newest first, with hostel names joined
#[tokio::test]
async fn lists_all_notices_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::hostel::HostelFactory::new(db)
        .name("Block A")
        .build()
        .await?;
    let now = Utc::now();
    let old = factory::notice::NoticeFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let new = factory::notice::NoticeFactory::new(db)
        .for_hostel(hostel.id)
        .created_at(now)
        .build()
        .await?;

    let notices = NoticeRepository::new(db).get_visible(None).await?;

    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].notice.id, new.id);
    assert_eq!(notices[0].hostel_name.as_deref(), Some("Block A"));
    assert_eq!(notices[1].notice.id, old.id);
    assert_eq!(notices[1].hostel_name, None);

    Ok(())
}

/// Tests that notices with identical timestamps fall back to id order.
///
/// Expected: higher id first
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now();
    let first = factory::notice::NoticeFactory::new(db).created_at(at).build().await?;
    let second = factory::notice::NoticeFactory::new(db).created_at(at).build().await?;

    let notices = NoticeRepository::new(db).get_visible(None).await?;

    assert_eq!(notices[0].notice.id, second.id);
    assert_eq!(notices[1].notice.id, first.id);

    Ok(())
}
