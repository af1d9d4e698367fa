//! Team Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the team
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers inserting teams, players, transfers, matches and tournaments
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_team_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_team_tables().build().await?;
//!
//!     let db = &test.db;
//!     let team = factory::create_team(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
