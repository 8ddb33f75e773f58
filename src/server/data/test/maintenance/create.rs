use super::*;

/// Tests raising a ticket.
///
/// Expected: Ok with status open and the student's hostel recorded
#[tokio::test]
async fn creates_open_ticket_in_student_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;

    let ticket = MaintenanceRepository::new(db)
        .create(
            CreateTicketParams {
                student_id: student.student_id.clone(),
                category: "electrical".to_string(),
                description: "fan broken".to_string(),
            },
            DerivedHostelId::from_student(&student),
        )
        .await?;

    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.hostel_id, hostel.id);
    assert_eq!(ticket.student_id, student.student_id);

    Ok(())
}
