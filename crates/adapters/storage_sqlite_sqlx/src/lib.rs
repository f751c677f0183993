//! # holocron-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `holocron-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Cascade person and planet deletions to their favorites
//!
//! ## Dependency rule
//! Depends on `holocron-app` (for port traits) and `holocron-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod columns;
pub mod error;
pub mod favorite_repo;
pub mod person_repo;
pub mod planet_repo;
pub mod pool;
pub mod user_repo;

pub use error::StorageError;
pub use favorite_repo::SqliteFavoriteRepository;
pub use person_repo::SqlitePersonRepository;
pub use planet_repo::SqlitePlanetRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
