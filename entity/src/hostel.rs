use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hostels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, extra = "COLLATE NOCASE")]
    pub name: String,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
    #[sea_orm(has_many = "super::notice::Entity")]
    Notice,
    #[sea_orm(has_many = "super::maintenance_request::Entity")]
    MaintenanceRequest,
    #[sea_orm(has_many = "super::leave_application::Entity")]
    LeaveApplication,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::notice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notice.def()
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
