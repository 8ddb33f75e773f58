use sea_orm::entity::prelude::*;

/// A hostel resident, keyed by the institution-issued student id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub name: String,
    pub phone: String,
    pub room_number: String,
    pub hostel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hostel::Entity",
        from = "Column::HostelId",
        to = "super::hostel::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Hostel,
    #[sea_orm(has_many = "super::maintenance_request::Entity")]
    MaintenanceRequest,
    #[sea_orm(has_many = "super::leave_application::Entity")]
    LeaveApplication,
}

impl Related<super::hostel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hostel.def()
    }
}

impl Related<super::maintenance_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRequest.def()
    }
}

impl Related<super::leave_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
