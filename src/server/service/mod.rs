//! Business logic layer.
//!
//! Services validate incoming payloads, orchestrate repository calls and translate
//! repository results into `AppError`s. Controllers never talk to repositories directly.

pub mod player;
pub mod team;

use sea_orm::{DbErr, SqlErr};

/// Message reported when a team name is already taken.
pub const NAME_TAKEN: &str = "Name already registered!";
/// Message reported when a founding date does not parse as `dd/MM/yyyy`.
pub const INVALID_FOUNDING_DATE: &str = "foundingDate must be in format dd/MM/yyyy and be valid!";
/// Message reported when a CPF is already registered to a player.
pub const CPF_TAKEN: &str = "Cpf already registered!";
/// Message reported when a CPF fails the checksum.
pub const INVALID_CPF: &str = "CPF invalid!";
/// Message reported when a birth date does not parse as `dd/MM/yyyy`.
pub const INVALID_BIRTH_DATE: &str = "birthDate must be in format dd/MM/yyyy and be valid!";
/// Message reported when a player is added to a team that does not exist.
pub const TEAM_NOT_EXISTS: &str = "Team not exists!";

/// Returns true when the database rejected a write because of a unique index.
///
/// The uniqueness lookups in the services are not transactional, so a concurrent
/// duplicate can still reach the insert; the storage constraint is the final guard.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true when the database rejected a write because a referenced row is missing.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
