//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain. They use SeaORM entity
//! models internally and return domain models from `server::model`, keeping the data layer
//! separate from business logic. Cascading deletes are not walked here: the schema's
//! foreign-key rules remove or detach dependent rows.

pub mod player;
pub mod team;
pub mod transfer;
