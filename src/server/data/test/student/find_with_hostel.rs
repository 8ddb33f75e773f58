use super::*;

/// Tests fetching a student with their hostel name.
///
/// Expected: Ok(Some) with the joined hostel name
#[tokio::test]
async fn finds_student_with_hostel_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;

    let found = StudentRepository::new(db)
        .find_with_hostel(&student.student_id)
        .await?
        .unwrap();

    assert_eq!(found.student.name, student.name);
    assert_eq!(found.hostel_name, hostel.name);

    Ok(())
}

/// Tests fetching an unknown student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = StudentRepository::new(db).find_with_hostel("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
