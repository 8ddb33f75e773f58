use super::*;

/// Tests that hostels are listed alphabetically regardless of insert order.
///
/// Expected: Ok with hostels sorted by name
#[tokio::test]
async fn lists_hostels_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Cedar", "Aspen", "Birch"] {
        factory::hostel::HostelFactory::new(db).name(name).build().await?;
    }

    let hostels = HostelRepository::new(db).get_all().await?;
    let names: Vec<&str> = hostels.iter().map(|h| h.name.as_str()).collect();

    assert_eq!(names, vec!["Aspen", "Birch", "Cedar"]);

    Ok(())
}

/// Tests that ordering ignores letter case.
///
/// Expected: Ok with lowercase names interleaved alphabetically
#[tokio::test]
async fn orders_names_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["cedar", "Birch", "aspen"] {
        factory::hostel::HostelFactory::new(db).name(name).build().await?;
    }

    let hostels = HostelRepository::new(db).get_all().await?;
    let names: Vec<&str> = hostels.iter().map(|h| h.name.as_str()).collect();

    assert_eq!(names, vec!["aspen", "Birch", "cedar"]);

    Ok(())
}

/// Tests listing when no hostels exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hostel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hostels = HostelRepository::new(db).get_all().await?;

    assert!(hostels.is_empty());

    Ok(())
}
