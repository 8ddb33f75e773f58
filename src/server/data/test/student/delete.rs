use super::*;

/// Tests deleting a student along with their tickets and leave applications.
///
/// Expected: Ok(1) with no dependent rows left
#[tokio::test]
async fn deletes_student_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, _) = factory::helpers::create_ticket_with_dependencies(db).await?;
    factory::create_leave(db, &student).await?;
    let (_, bystander) = factory::helpers::create_student_with_hostel(db).await?;

    let rows = StudentRepository::new(db)
        .delete(&student.student_id)
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(Student::find().count(db).await?, 1);
    assert!(Student::find_by_id(bystander.student_id).one(db).await?.is_some());
    assert_eq!(MaintenanceRequest::find().count(db).await?, 0);
    assert_eq!(LeaveApplication::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = StudentRepository::new(db).delete("nobody").await?;

    assert_eq!(rows, 0);

    Ok(())
}
