use crate::server::{
    data::leave::LeaveRepository,
    model::{
        leave::{CreateLeaveParams, UpdateLeaveStatusParams},
        status::LeaveStatus,
        student::DerivedHostelId,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_student;
mod update_status;
