use super::*;

/// Tests the admin leave listing.
///
/// Expected: newest first with student and hostel names
#[tokio::test]
async fn lists_leaves_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;
    let now = Utc::now();
    let older = factory::leave_application::LeaveFactory::new(db, &student)
        .applied_at(now - Duration::days(3))
        .build()
        .await?;
    let newer = factory::leave_application::LeaveFactory::new(db, &student)
        .applied_at(now)
        .build()
        .await?;

    let leaves = LeaveRepository::new(db).get_all().await?;

    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].leave.id, newer.id);
    assert_eq!(leaves[1].leave.id, older.id);
    assert_eq!(leaves[0].student_name, student.name);
    assert_eq!(leaves[0].hostel_name, hostel.name);

    Ok(())
}
