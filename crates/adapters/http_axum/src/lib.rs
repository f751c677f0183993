//! # holocron-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** (`/people`, `/planet`, `/favorites`,
//!   `/favorite/planet/{planet_id}`, `/users`, …)
//! - Serve the route sitemap at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into `{"error": ...}` bodies with a status code
//!
//! ## Dependency rule
//! Depends on `holocron-app` (for port traits and services) and
//! `holocron-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod sitemap;
pub mod state;
