use crate::server::{data::hostel::HostelRepository, model::hostel::CreateHostelParams};
use entity::prelude::*;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_all;
