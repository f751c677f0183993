//! User service: use-cases for managing user accounts.

use holocron_domain::error::{ConflictError, HolocronError, NotFoundError};
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if a required field is empty,
    /// [`HolocronError::Conflict`] if the email is already registered, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, HolocronError> {
        user.validate()?;
        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Err(ConflictError::Duplicate { entity: "User" }.into());
        }
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HolocronError> {
        self.repo.get_all().await
    }
}
