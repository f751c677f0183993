//! # holocron-domain
//!
//! Pure domain model for the holocron favorites service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (accounts that own favorites; passwords never leave the process)
//! - Define **People** and **Planets** (the things users can favorite)
//! - Define **Favorites** (a user's mark on exactly one planet or one person)
//! - Contain all invariant enforcement and presence checks
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
