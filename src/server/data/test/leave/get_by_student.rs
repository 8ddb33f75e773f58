use super::*;

/// Tests that a student only sees their own leave applications.
///
/// Expected: Ok with only the requesting student's application
#[tokio::test]
async fn returns_only_own_leaves() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, leave) = factory::helpers::create_leave_with_dependencies(db).await?;
    factory::helpers::create_leave_with_dependencies(db).await?;

    let leaves = LeaveRepository::new(db)
        .get_by_student(&student.student_id)
        .await?;

    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].id, leave.id);
    assert_eq!(leaves[0].status, LeaveStatus::Pending);

    Ok(())
}
