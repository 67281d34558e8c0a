//! # swap-db
//!
//! PostgreSQL implementations of the repository traits defined in `swap-core`.
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! Uniqueness rules (usernames, skill names, user-skill triples, pending swaps,
//! one feedback per participant) live in the schema; repositories surface
//! their violations as conflict errors.
//!
//! ```rust,ignore
//! use swap_common::DatabaseConfig;
//! use swap_db::{create_pool, run_migrations, PgAccountRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let accounts = PgAccountRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, ping, run_migrations, PgPool, MIGRATOR};
pub use repositories::{
    PgAccountRepository, PgFeedbackRepository, PgProfileRepository, PgSkillRepository,
    PgSwapRequestRepository, PgUserSkillRepository,
};
