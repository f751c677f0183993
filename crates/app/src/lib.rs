//! # holocron-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: create, get, list, find by email
//!   - `PersonRepository` / `PlanetRepository`: create, get, list, cascading delete
//!   - `FavoriteRepository`: create, get, list, find by owner and target, delete
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`, `PersonService`, `PlanetService`: CRUD over the catalogue
//!   - `FavoriteService`: link a user to a planet or person, and unlink it
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `holocron-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
