use super::*;

/// Tests creating a student with omitted optional fields.
///
/// Expected: Ok with phone and room number stored empty
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hostel = factory::create_hostel(db).await?;

    let student = StudentRepository::new(db)
        .create(create_params("S1", hostel.id))
        .await?;

    assert_eq!(student.student_id, "S1");
    assert_eq!(student.hostel_id, hostel.id);
    assert_eq!(student.phone, "");
    assert_eq!(student.room_number, "");

    Ok(())
}

/// Tests that student ids are unique.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;

    let result = StudentRepository::new(db)
        .create(create_params(&student.student_id, hostel.id))
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that the hostel foreign key is enforced.
///
/// Expected: Err and no student row inserted
#[tokio::test]
async fn rejects_unknown_hostel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db).create(create_params("S1", 999)).await;

    assert!(result.is_err());
    assert_eq!(Student::find().count(db).await?, 0);

    Ok(())
}
