use super::*;

/// Tests approving a leave application.
///
/// Expected: Ok(1) with status approved stored
#[tokio::test]
async fn approves_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, leave) = factory::helpers::create_leave_with_dependencies(db).await?;

    let rows = LeaveRepository::new(db)
        .update_status(UpdateLeaveStatusParams {
            id: leave.id,
            status: LeaveStatus::Approved,
        })
        .await?;

    assert_eq!(rows, 1);
    let stored = LeaveApplication::find_by_id(leave.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "approved");

    Ok(())
}

/// Tests updating a leave application that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = LeaveRepository::new(db)
        .update_status(UpdateLeaveStatusParams {
            id: 7,
            status: LeaveStatus::Rejected,
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
