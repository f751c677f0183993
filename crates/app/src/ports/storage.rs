//! Storage port: repository traits for persistence.
//!
//! One repository per entity. Ids are assigned by the store on `create`.
//! `delete` reports whether a row was removed so callers can turn a miss
//! into a not-found error.

use std::future::Future;

use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{Favorite, FavoriteTarget, NewFavorite};
use holocron_domain::id::{FavoriteId, PersonId, PlanetId, UserId};
use holocron_domain::person::{NewPerson, Person};
use holocron_domain::planet::{NewPlanet, Planet};
use holocron_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Store a new user. Fails with a conflict when the email is taken.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolocronError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send;

    /// Get all users, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send;

    /// Find the user owning `email`.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send;
}

/// Repository for persisting and querying [`Person`]s.
pub trait PersonRepository {
    /// Store a new person.
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolocronError>> + Send;

    /// Get a person by its unique identifier.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolocronError>> + Send;

    /// Get all people, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolocronError>> + Send;

    /// Delete a person together with every favorite pointing at it.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}

/// Repository for persisting and querying [`Planet`]s.
pub trait PlanetRepository {
    /// Store a new planet.
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolocronError>> + Send;

    /// Get a planet by its unique identifier.
    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send;

    /// Get all planets, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send;

    /// Delete a planet together with every favorite pointing at it.
    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}

/// Repository for persisting and querying [`Favorite`]s.
pub trait FavoriteRepository {
    /// Store a new favorite.
    fn create(
        &self,
        favorite: NewFavorite,
    ) -> impl Future<Output = Result<Favorite, HolocronError>> + Send;

    /// Get a favorite by its unique identifier.
    fn get_by_id(
        &self,
        id: FavoriteId,
    ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send;

    /// Get all favorites, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send;

    /// Get every favorite owned by `user_id`.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send;

    /// Find the first favorite matching the exact `(user_id, target)` pair.
    fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send;

    /// Delete a single favorite.
    fn delete(&self, id: FavoriteId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}
