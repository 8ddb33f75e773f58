pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_hostel_table;
mod m20251018_000002_create_student_table;
mod m20251018_000003_create_notice_table;
mod m20251018_000004_create_maintenance_request_table;
mod m20251018_000005_create_leave_application_table;
mod m20251018_000006_create_admin_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_hostel_table::Migration),
            Box::new(m20251018_000002_create_student_table::Migration),
            Box::new(m20251018_000003_create_notice_table::Migration),
            Box::new(m20251018_000004_create_maintenance_request_table::Migration),
            Box::new(m20251018_000005_create_leave_application_table::Migration),
            Box::new(m20251018_000006_create_admin_table::Migration),
        ]
    }
}
