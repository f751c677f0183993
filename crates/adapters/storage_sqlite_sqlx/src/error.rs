//! Storage-specific error type wrapping sqlx errors.

use sqlx::error::ErrorKind;

use holocron_domain::error::{ConflictError, HolocronError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// Convert a failed write on `entity`, turning constraint violations into
    /// [`HolocronError::Conflict`] so callers see a client error.
    pub(crate) fn on_write(self, entity: &'static str) -> HolocronError {
        if let Self::Database(sqlx::Error::Database(db_err)) = &self {
            let conflict = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConflictError::Duplicate { entity }),
                ErrorKind::ForeignKeyViolation => Some(ConflictError::MissingReference { entity }),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    Some(ConflictError::Constraint { entity })
                }
                _ => None,
            };
            if let Some(conflict) = conflict {
                tracing::debug!(error = %db_err, entity, "write rejected by constraint");
                return conflict.into();
            }
        }
        self.into()
    }
}

impl From<StorageError> for HolocronError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Shorthand for mapping sqlx failures on a write.
pub(crate) fn write_error(entity: &'static str) -> impl FnOnce(sqlx::Error) -> HolocronError {
    move |err| StorageError::from(err).on_write(entity)
}
