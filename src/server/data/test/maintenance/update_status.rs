use super::*;

/// Tests moving a ticket between statuses, including reopening a closed ticket.
///
/// Expected: Ok(1) for each update with the final status stored
#[tokio::test]
async fn updates_status_without_transition_rules() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    let repo = MaintenanceRepository::new(db);

    for status in [TicketStatus::Closed, TicketStatus::Open] {
        let rows = repo
            .update_status(UpdateTicketStatusParams {
                id: ticket.id,
                status,
            })
            .await?;
        assert_eq!(rows, 1);
    }

    let stored = MaintenanceRequest::find_by_id(ticket.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "open");

    Ok(())
}

/// Tests updating a ticket that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = MaintenanceRepository::new(db)
        .update_status(UpdateTicketStatusParams {
            id: 42,
            status: TicketStatus::Closed,
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
