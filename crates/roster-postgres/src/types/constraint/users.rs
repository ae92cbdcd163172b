//! Users table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Users table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum UserConstraints {
    // User validation constraints
    #[strum(serialize = "users_display_name_not_empty")]
    DisplayNameNotEmpty,
    #[strum(serialize = "users_email_address_not_empty")]
    EmailAddressNotEmpty,

    // User uniqueness constraints
    #[strum(serialize = "users_pkey")]
    PrimaryKey,
    #[strum(serialize = "users_email_address_key")]
    EmailAddressUnique,
}

impl UserConstraints {
    /// Creates a new [`UserConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            UserConstraints::DisplayNameNotEmpty | UserConstraints::EmailAddressNotEmpty => {
                ConstraintCategory::Validation
            }

            UserConstraints::PrimaryKey | UserConstraints::EmailAddressUnique => {
                ConstraintCategory::Uniqueness
            }
        }
    }
}

impl From<UserConstraints> for String {
    #[inline]
    fn from(val: UserConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for UserConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
