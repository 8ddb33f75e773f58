use super::*;

/// Tests that only provided fields are changed.
///
/// Expected: Ok(1) with name changed and other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;

    let mut params = empty_update(&student.student_id);
    params.name = Some("Renamed".to_string());
    let rows = StudentRepository::new(db).update(params).await?;

    assert_eq!(rows, 1);

    let stored = Student::find_by_id(student.student_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.phone, student.phone);
    assert_eq!(stored.room_number, student.room_number);
    assert_eq!(stored.hostel_id, hostel.id);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = empty_update("nobody");
    params.phone = Some("555".to_string());
    let rows = StudentRepository::new(db).update(params).await?;

    assert_eq!(rows, 0);

    Ok(())
}
