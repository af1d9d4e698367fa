use crate::server::{data::player::PlayerRepository, model::player::CreatePlayerParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_cpf;
