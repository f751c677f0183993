//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a value could not be turned into an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    #[error("not an integer")]
    NotInteger(#[from] ParseIntError),

    #[error("must be a positive integer")]
    NotPositive,
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ParseIdError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                if value <= 0 {
                    return Err(ParseIdError::NotPositive);
                }
                Ok(Self(value))
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s.parse::<i64>()?)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`Person`](crate::person::Person).
    PersonId
);

define_id!(
    /// Unique identifier for a [`Planet`](crate::planet::Planet).
    PlanetId
);

define_id!(
    /// Unique identifier for a [`Favorite`](crate::favorite::Favorite).
    FavoriteId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PlanetId::try_from(42).unwrap();
        let parsed: PlanetId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let id = UserId::try_from(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let parsed: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_reject_zero_and_negative_values() {
        assert_eq!(PersonId::try_from(0), Err(ParseIdError::NotPositive));
        assert_eq!(PersonId::from_str("-4"), Err(ParseIdError::NotPositive));
        assert!(serde_json::from_str::<FavoriteId>("0").is_err());
    }

    #[test]
    fn should_return_error_when_parsing_non_integer() {
        let result = UserId::from_str("luke");
        assert!(matches!(result, Err(ParseIdError::NotInteger(_))));
    }
}
