//! Domain models and operation parameters used inside the server.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary so
//! entity models never leak into service or controller layers. Each domain model provides
//! `into_dto` for the controller layer.

pub mod player;
pub mod team;
pub mod transfer;
