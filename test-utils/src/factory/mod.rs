//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let team = factory::create_team(&db).await?;
//! let player = factory::create_player(&db, team.id).await?;
//!
//! let player = factory::player::PlayerFactory::new(&db)
//!     .cpf("52998224725")
//!     .team_id(Some(team.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `team` - Create team entities
//! - `player` - Create player entities with valid generated CPFs
//! - `tournament` - Create tournaments and tournament memberships
//! - `transfer` - Create transfers between two teams
//! - `game` - Create matches between two teams
//! - `helpers` - Unique ID and CPF generation

pub mod game;
pub mod helpers;
pub mod player;
pub mod team;
pub mod tournament;
pub mod transfer;

pub use game::create_game;
pub use player::create_player;
pub use team::create_team;
pub use tournament::{add_team_to_tournament, create_tournament};
pub use transfer::create_transfer;
