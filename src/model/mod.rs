//! Wire-format DTOs shared by every endpoint.

pub mod api;
pub mod date;
pub mod player;
pub mod team;
pub mod transfer;
