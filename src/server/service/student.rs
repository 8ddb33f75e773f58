use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hostel::HostelRepository, student::StudentRepository},
    error::AppError,
    model::student::{CreateStudentParams, Student, StudentWithHostel, UpdateStudentParams},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student in an existing hostel
    ///
    /// # Returns
    /// - `Ok(Student)` - Created student
    /// - `Err(AppError::NotFound)` - The hostel does not exist
    /// - `Err(AppError::Conflict)` - The student_id is already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        self.ensure_hostel_exists(params.hostel_id).await?;

        let student = StudentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "student_id already exists"))?;

        tracing::info!(
            "Registered student {} in hostel {}",
            student.student_id,
            student.hostel_id
        );

        Ok(student)
    }

    /// Gets all students with their hostel names
    pub async fn get_all(&self) -> Result<Vec<StudentWithHostel>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    /// Applies the provided field changes to a student
    ///
    /// # Returns
    /// - `Ok(())` - Student exists and was updated
    /// - `Err(AppError::NotFound)` - The student, or the requested new hostel, does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateStudentParams) -> Result<(), AppError> {
        if let Some(hostel_id) = params.hostel_id {
            self.ensure_hostel_exists(hostel_id).await?;
        }

        let repo = StudentRepository::new(self.db);

        // Nothing to write; still answer not-found for unknown students
        if params.is_empty() {
            return match repo.find_hostel_id(&params.student_id).await? {
                Some(_) => Ok(()),
                None => Err(student_not_found()),
            };
        }

        let student_id = params.student_id.clone();
        if repo.update(params).await? == 0 {
            return Err(student_not_found());
        }

        tracing::info!("Updated student {}", student_id);

        Ok(())
    }

    /// Deletes a student together with their tickets and leave applications
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, student_id: &str) -> Result<(), AppError> {
        if StudentRepository::new(self.db).delete(student_id).await? == 0 {
            return Err(student_not_found());
        }

        tracing::info!("Deleted student {}", student_id);

        Ok(())
    }

    async fn ensure_hostel_exists(&self, hostel_id: i32) -> Result<(), AppError> {
        if HostelRepository::new(self.db).exists(hostel_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Hostel not found".to_string()))
        }
    }
}

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}
