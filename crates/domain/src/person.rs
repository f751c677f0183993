//! Person: a character that users can mark as a favorite.

use serde::Serialize;

use crate::error::{HolocronError, ValidationError, require};
use crate::id::PersonId;

/// A persisted person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub species: String,
    pub gender: String,
    pub homeworld: String,
}

impl Person {
    /// Create a builder for a new person draft.
    #[must_use]
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: PersonId, draft: NewPerson) -> Self {
        Self {
            id,
            name: draft.name,
            species: draft.species,
            gender: draft.gender,
            homeworld: draft.homeworld,
        }
    }
}

/// A person that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub species: String,
    pub gender: String,
    pub homeworld: String,
}

impl NewPerson {
    /// Check presence of required fields.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), HolocronError> {
        require("name", &self.name)?;
        require("species", &self.species)?;
        require("gender", &self.gender)?;
        require("homeworld", &self.homeworld)?;
        Ok(())
    }
}

/// Step-by-step builder for [`NewPerson`].
#[derive(Debug, Default)]
pub struct PersonBuilder {
    name: Option<String>,
    species: Option<String>,
    gender: Option<String>,
    homeworld: Option<String>,
}

impl PersonBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn homeworld(mut self, homeworld: impl Into<String>) -> Self {
        self.homeworld = Some(homeworld.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPerson`].
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<NewPerson, HolocronError> {
        let person = NewPerson {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            species: self.species.ok_or(ValidationError::MissingField("species"))?,
            gender: self.gender.ok_or(ValidationError::MissingField("gender"))?,
            homeworld: self
                .homeworld
                .ok_or(ValidationError::MissingField("homeworld"))?,
        };
        person.validate()?;
        Ok(person)
    }
}
