//! Column decoding helpers shared by the repositories.

use sqlx::Row;
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};

use holocron_domain::id::ParseIdError;

use crate::error::StorageError;

/// Read a non-null id column into a typed identifier.
pub(crate) fn id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: TryFrom<i64, Error = ParseIdError>,
{
    let raw: i64 = row.try_get(column)?;
    T::try_from(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Read a nullable id column into a typed identifier.
pub(crate) fn optional_id<T>(row: &SqliteRow, column: &str) -> Result<Option<T>, sqlx::Error>
where
    T: TryFrom<i64, Error = ParseIdError>,
{
    let raw: Option<i64> = row.try_get(column)?;
    raw.map(T::try_from)
        .transpose()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// The id the store assigned to the row just inserted.
pub(crate) fn inserted_id<T>(result: &SqliteQueryResult) -> Result<T, StorageError>
where
    T: TryFrom<i64, Error = ParseIdError>,
{
    T::try_from(result.last_insert_rowid())
        .map_err(|err| StorageError::Database(sqlx::Error::Decode(Box::new(err))))
}
