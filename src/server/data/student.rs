use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{
    CreateStudentParams, DerivedHostelId, Student, StudentWithHostel, UpdateStudentParams,
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// Fails with a unique constraint violation when the student_id is already taken.
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            room_number: ActiveValue::Set(params.room_number),
            hostel_id: ActiveValue::Set(params.hostel_id),
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Gets all students with their hostel names
    ///
    /// Ordered by hostel name, then room number, then student name.
    pub async fn get_all(&self) -> Result<Vec<StudentWithHostel>, DbErr> {
        let results = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Hostel)
            .order_by_asc(entity::hostel::Column::Name)
            .order_by_asc(entity::student::Column::RoomNumber)
            .order_by_asc(entity::student::Column::Name)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(student, hostel)| with_hostel(student, hostel))
            .collect()
    }

    /// Gets a student by id together with their hostel name
    pub async fn find_with_hostel(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentWithHostel>, DbErr> {
        let result = entity::prelude::Student::find_by_id(student_id.to_string())
            .find_also_related(entity::prelude::Hostel)
            .one(self.db)
            .await?;

        result
            .map(|(student, hostel)| with_hostel(student, hostel))
            .transpose()
    }

    /// Gets the hostel a student currently lives in
    ///
    /// # Returns
    /// - `Ok(Some(DerivedHostelId))` - Student exists
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_hostel_id(&self, student_id: &str) -> Result<Option<DerivedHostelId>, DbErr> {
        let student = entity::prelude::Student::find_by_id(student_id.to_string())
            .one(self.db)
            .await?;

        Ok(student.as_ref().map(DerivedHostelId::from_student))
    }

    /// Updates the provided fields of a student
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, 0 when the student does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateStudentParams) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Student::update_many()
            .filter(entity::student::Column::StudentId.eq(params.student_id));

        if let Some(name) = params.name {
            update = update.col_expr(entity::student::Column::Name, Expr::value(name));
        }
        if let Some(phone) = params.phone {
            update = update.col_expr(entity::student::Column::Phone, Expr::value(phone));
        }
        if let Some(hostel_id) = params.hostel_id {
            update = update.col_expr(entity::student::Column::HostelId, Expr::value(hostel_id));
        }
        if let Some(room_number) = params.room_number {
            update = update.col_expr(
                entity::student::Column::RoomNumber,
                Expr::value(room_number),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes a student; their tickets and leave applications go with them
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the student does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, student_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(student_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn with_hostel(
    student: entity::student::Model,
    hostel: Option<entity::hostel::Model>,
) -> Result<StudentWithHostel, DbErr> {
    let hostel = hostel.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Hostel {} for student {} not found",
            student.hostel_id, student.student_id
        ))
    })?;

    Ok(StudentWithHostel::from_entity(student, hostel))
}
