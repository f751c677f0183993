//! Planet: a world that users can mark as a favorite.

use serde::Serialize;

use crate::error::{HolocronError, ValidationError, require};
use crate::id::PlanetId;

/// A persisted planet.
///
/// `population` is free text on purpose: values like `"unknown"` are common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: String,
    pub population: String,
    pub terrain: String,
}

impl Planet {
    /// Create a builder for a new planet draft.
    #[must_use]
    pub fn builder() -> PlanetBuilder {
        PlanetBuilder::default()
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: PlanetId, draft: NewPlanet) -> Self {
        Self {
            id,
            name: draft.name,
            climate: draft.climate,
            population: draft.population,
            terrain: draft.terrain,
        }
    }
}

/// A planet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub population: String,
    pub terrain: String,
}

impl NewPlanet {
    /// Check presence of required fields.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), HolocronError> {
        require("name", &self.name)?;
        require("climate", &self.climate)?;
        require("population", &self.population)?;
        require("terrain", &self.terrain)?;
        Ok(())
    }
}

/// Step-by-step builder for [`NewPlanet`].
#[derive(Debug, Default)]
pub struct PlanetBuilder {
    name: Option<String>,
    climate: Option<String>,
    population: Option<String>,
    terrain: Option<String>,
}

impl PlanetBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    #[must_use]
    pub fn population(mut self, population: impl Into<String>) -> Self {
        self.population = Some(population.into());
        self
    }

    #[must_use]
    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPlanet`].
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<NewPlanet, HolocronError> {
        let planet = NewPlanet {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            climate: self.climate.ok_or(ValidationError::MissingField("climate"))?,
            population: self
                .population
                .ok_or(ValidationError::MissingField("population"))?,
            terrain: self.terrain.ok_or(ValidationError::MissingField("terrain"))?,
        };
        planet.validate()?;
        Ok(planet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_planet_when_all_fields_provided() {
        let draft = Planet::builder()
            .name("Hoth")
            .climate("frozen")
            .population("unknown")
            .terrain("tundra, ice caves, mountain ranges")
            .build()
            .unwrap();
        assert_eq!(draft.population, "unknown");
    }

    #[test]
    fn should_return_empty_field_when_climate_blank() {
        let result = Planet::builder()
            .name("Dagobah")
            .climate(" ")
            .population("unknown")
            .terrain("swamp")
            .build();
        assert!(matches!(
            result,
            Err(HolocronError::Validation(ValidationError::EmptyField(
                "climate"
            )))
        ));
    }
}
