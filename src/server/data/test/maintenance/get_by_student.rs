use super::*;

/// Tests that a student only sees their own tickets.
///
/// Expected: Ok with only the requesting student's ticket
#[tokio::test]
async fn returns_only_own_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    factory::helpers::create_ticket_with_dependencies(db).await?;

    let tickets = MaintenanceRepository::new(db)
        .get_by_student(&student.student_id)
        .await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, ticket.id);
    assert_eq!(tickets[0].status, TicketStatus::Open);

    Ok(())
}

/// Tests listing tickets for an unknown student.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(MaintenanceRepository::new(db)
        .get_by_student("nobody")
        .await?
        .is_empty());

    Ok(())
}
