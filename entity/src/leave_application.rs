use sea_orm::entity::prelude::*;

/// Leave application submitted by a student.
///
/// `hostel_id` is copied from the owning student when the application is created.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: String,
    pub hostel_id: i32,
    pub from_date: Date,
    pub to_date: Date,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    /// One of `pending`, `approved` or `rejected`.
    pub status: String,
    pub applied_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::hostel::Entity",
        from = "Column::HostelId",
        to = "super::hostel::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Hostel,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::hostel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hostel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
