//! SeaORM entity models for the team registry schema.
//!
//! Foreign-key cascade rules are declared on the `belongs_to` relations so that
//! schemas built from these entities (tests) match the migrations (production).

pub mod prelude;

pub mod game;
pub mod player;
pub mod team;
pub mod tournament;
pub mod tournament_team;
pub mod transfer;
