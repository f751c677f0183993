//! Favorite: a user's mark on exactly one planet or one person.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::id::{FavoriteId, PersonId, PlanetId, UserId};

/// What a favorite points at. Exactly one target, never both, never none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(PlanetId),
    Person(PersonId),
}

impl FavoriteTarget {
    /// Rebuild a target from the two nullable columns.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFavoriteTarget`] unless exactly one
    /// of the ids is present.
    pub fn from_columns(
        planet_id: Option<PlanetId>,
        people_id: Option<PersonId>,
    ) -> Result<Self, ValidationError> {
        match (planet_id, people_id) {
            (Some(planet_id), None) => Ok(Self::Planet(planet_id)),
            (None, Some(people_id)) => Ok(Self::Person(people_id)),
            _ => Err(ValidationError::InvalidFavoriteTarget),
        }
    }

    #[must_use]
    pub fn planet_id(self) -> Option<PlanetId> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Person(_) => None,
        }
    }

    #[must_use]
    pub fn people_id(self) -> Option<PersonId> {
        match self {
            Self::Person(id) => Some(id),
            Self::Planet(_) => None,
        }
    }

    /// Label used in messages, e.g. `Favorite planet not found`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Person(_) => "person",
        }
    }
}

/// A persisted favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: FavoriteId, draft: NewFavorite) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            target: draft.target,
        }
    }
}

/// Flat wire shape: `{id, user_id, planet_id, people_id}`.
impl Serialize for Favorite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Favorite", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("planet_id", &self.target.planet_id())?;
        state.serialize_field("people_id", &self.target.people_id())?;
        state.end()
    }
}

/// A favorite that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

impl NewFavorite {
    #[must_use]
    pub fn planet(user_id: UserId, planet_id: PlanetId) -> Self {
        Self {
            user_id,
            target: FavoriteTarget::Planet(planet_id),
        }
    }

    #[must_use]
    pub fn person(user_id: UserId, people_id: PersonId) -> Self {
        Self {
            user_id,
            target: FavoriteTarget::Person(people_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::try_from(3).unwrap()
    }

    #[test]
    fn should_serialize_planet_favorite_with_null_people_id() {
        let favorite = Favorite::from_draft(
            FavoriteId::try_from(1).unwrap(),
            NewFavorite::planet(user(), PlanetId::try_from(5).unwrap()),
        );
        let json = serde_json::to_value(&favorite).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "user_id": 3, "planet_id": 5, "people_id": null})
        );
    }

    #[test]
    fn should_serialize_person_favorite_with_null_planet_id() {
        let favorite = Favorite::from_draft(
            FavoriteId::try_from(2).unwrap(),
            NewFavorite::person(user(), PersonId::try_from(7).unwrap()),
        );
        let json = serde_json::to_value(&favorite).unwrap();
        assert_eq!(json["planet_id"], serde_json::Value::Null);
        assert_eq!(json["people_id"], 7);
    }

    #[test]
    fn should_reject_columns_with_both_targets() {
        let result = FavoriteTarget::from_columns(
            Some(PlanetId::try_from(1).unwrap()),
            Some(PersonId::try_from(1).unwrap()),
        );
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFavoriteTarget)
        ));
    }

    #[test]
    fn should_reject_columns_with_no_target() {
        let result = FavoriteTarget::from_columns(None, None);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFavoriteTarget)
        ));
    }

    #[test]
    fn should_expose_exactly_one_id_for_every_target() {
        let targets = [
            FavoriteTarget::Planet(PlanetId::try_from(4).unwrap()),
            FavoriteTarget::Person(PersonId::try_from(4).unwrap()),
        ];
        for target in targets {
            assert!(target.planet_id().is_some() != target.people_id().is_some());
        }
    }
}
