use super::*;

/// Tests applying for leave.
///
/// Expected: Ok with status pending, dates kept and the student's hostel recorded
#[tokio::test]
async fn creates_pending_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;
    let from_date = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
    let to_date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

    let leave = LeaveRepository::new(db)
        .create(
            CreateLeaveParams {
                student_id: student.student_id.clone(),
                from_date,
                to_date,
                reason: "Winter break".to_string(),
            },
            DerivedHostelId::from_student(&student),
        )
        .await?;

    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.hostel_id, hostel.id);
    assert_eq!(leave.from_date, from_date);
    assert_eq!(leave.to_date, to_date);

    Ok(())
}
