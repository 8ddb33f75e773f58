use super::*;

/// Tests the admin ticket listing.
///
/// Expected: newest first with student and hostel names
#[tokio::test]
async fn lists_tickets_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;
    let now = Utc::now();
    let older = factory::maintenance_request::TicketFactory::new(db, &student)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::maintenance_request::TicketFactory::new(db, &student)
        .created_at(now)
        .build()
        .await?;

    let tickets = MaintenanceRepository::new(db).get_all().await?;

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].ticket.id, newer.id);
    assert_eq!(tickets[1].ticket.id, older.id);
    assert_eq!(tickets[0].student_name, student.name);
    assert_eq!(tickets[0].hostel_name, hostel.name);

    Ok(())
}

/// Tests the admin listing with no tickets.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(MaintenanceRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
