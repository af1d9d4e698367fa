use crate::server::data::transfer::TransferRepository;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_incoming;
mod get_outgoing;
