use super::*;

/// Tests that students are ordered by hostel name, then room number, then name.
///
/// Expected: Ok with students in the documented order and hostel names joined
#[tokio::test]
async fn orders_by_hostel_room_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let birch = factory::hostel::HostelFactory::new(db).name("Birch").build().await?;
    let aspen = factory::hostel::HostelFactory::new(db).name("Aspen").build().await?;

    factory::student::StudentFactory::new(db, birch.id)
        .student_id("S1")
        .name("Amy")
        .room_number("101")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, aspen.id)
        .student_id("S2")
        .name("Zed")
        .room_number("201")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, aspen.id)
        .student_id("S3")
        .name("Bob")
        .room_number("102")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, aspen.id)
        .student_id("S4")
        .name("Ann")
        .room_number("102")
        .build()
        .await?;

    let students = StudentRepository::new(db).get_all().await?;
    let ids: Vec<&str> = students
        .iter()
        .map(|s| s.student.student_id.as_str())
        .collect();

    assert_eq!(ids, vec!["S4", "S3", "S2", "S1"]);
    assert_eq!(students[0].hostel_name, "Aspen");
    assert_eq!(students[3].hostel_name, "Birch");

    Ok(())
}
