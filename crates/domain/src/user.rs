//! User: an account that owns favorites.

use std::fmt;

use serde::Serialize;

use crate::error::{HolocronError, ValidationError, require};
use crate::id::UserId;

/// Opaque stored password.
///
/// Has no `Serialize` impl and a redacted `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value, for persistence only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// A persisted user.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub is_active: bool,
}

impl User {
    /// Create a builder for a new user draft.
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: UserId, draft: NewUser) -> Self {
        Self {
            id,
            email: draft.email,
            password: draft.password,
            is_active: draft.is_active,
        }
    }
}

/// A user that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: Password,
    pub is_active: bool,
}

impl NewUser {
    /// Check presence of required fields.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] when `email` or `password` is empty.
    pub fn validate(&self) -> Result<(), HolocronError> {
        require("email", &self.email)?;
        require("password", self.password.expose())?;
        Ok(())
    }
}

/// Step-by-step builder for [`NewUser`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    email: Option<String>,
    password: Option<Password>,
    is_active: Option<bool>,
}

impl UserBuilder {
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }

    #[must_use]
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Consume the builder, validate, and return a [`NewUser`].
    ///
    /// Users are active unless told otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if `email` or `password` is
    /// missing or empty.
    pub fn build(self) -> Result<NewUser, HolocronError> {
        let user = NewUser {
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            password: self
                .password
                .ok_or(ValidationError::MissingField("password"))?,
            is_active: self.is_active.unwrap_or(true),
        };
        user.validate()?;
        Ok(user)
    }
}
