use super::*;

/// Tests resolving the hostel of a student after they move.
///
/// Expected: Ok(Some) with the student's current hostel
#[tokio::test]
async fn resolves_current_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_hostel(db).await?;
    let other = factory::create_hostel(db).await?;
    let repo = StudentRepository::new(db);

    let mut params = empty_update(&student.student_id);
    params.hostel_id = Some(other.id);
    repo.update(params).await?;

    let resolved = repo.find_hostel_id(&student.student_id).await?.unwrap();

    assert_eq!(resolved.get(), other.id);

    Ok(())
}

/// Tests resolving the hostel of an unknown student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(StudentRepository::new(db)
        .find_hostel_id("nobody")
        .await?
        .is_none());

    Ok(())
}
