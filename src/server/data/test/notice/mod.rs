use crate::server::{
    data::notice::NoticeRepository,
    model::notice::{CreateNoticeParams, NoticeAudience},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_visible;
