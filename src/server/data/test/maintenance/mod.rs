use crate::server::{
    data::maintenance::MaintenanceRepository,
    model::{
        maintenance::{CreateTicketParams, UpdateTicketStatusParams},
        status::TicketStatus,
        student::DerivedHostelId,
    },
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_student;
mod update_status;
