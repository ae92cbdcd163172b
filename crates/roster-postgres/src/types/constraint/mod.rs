//! Typed view of the constraint names Postgres reports on failed writes.
//!
//! Parsing the names once, here, keeps the rest of the system free of string
//! matching: callers get an enum and decide how each database-enforced rule
//! maps onto their own error contract.

mod users;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::users::UserConstraints;

/// Any recognized constraint violation, grouped by table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    User(UserConstraints),
}

/// What a constraint protects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Shape of the data (format, length, non-emptiness).
    Validation,
    /// One-of-a-kind guarantees (primary keys, unique indexes).
    Uniqueness,
}

impl ConstraintViolation {
    /// Parses a constraint name as reported by Postgres.
    ///
    /// Returns `None` for names this crate does not know. Names are expected
    /// to start with their table name, which routes them to the right
    /// table-specific enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_postgres::types::ConstraintViolation;
    ///
    /// assert!(ConstraintViolation::new("users_email_address_key").is_some());
    /// assert!(ConstraintViolation::new("unknown_constraint").is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        let table = constraint.split('_').next()?;

        match table {
            "users" => UserConstraints::new(constraint).map(Self::User),
            _ => None,
        }
    }

    /// Returns the table this constraint lives on.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::User(_) => "users",
        }
    }

    /// Returns what this constraint protects.
    pub fn constraint_category(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::User(c) => c.categorize(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::User(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or(strum::ParseError::VariantNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_constraints() {
        let violation = ConstraintViolation::new("users_email_address_key");
        assert_eq!(
            violation,
            Some(ConstraintViolation::User(
                UserConstraints::EmailAddressUnique
            ))
        );
        assert_eq!(violation.unwrap().table_name(), "users");
    }

    #[test]
    fn rejects_unknown_constraints() {
        assert_eq!(ConstraintViolation::new("users_unknown"), None);
        assert_eq!(ConstraintViolation::new("teams_email_key"), None);
        assert_eq!(ConstraintViolation::new(""), None);
    }

    #[test]
    fn categorizes_uniqueness() {
        let violation = ConstraintViolation::new("users_email_address_key").unwrap();
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Uniqueness
        );
    }

    #[test]
    fn round_trips_through_string() {
        let violation = ConstraintViolation::new("users_display_name_not_empty").unwrap();
        let name = String::from(violation.clone());
        assert_eq!(ConstraintViolation::try_from(name), Ok(violation));
    }
}
