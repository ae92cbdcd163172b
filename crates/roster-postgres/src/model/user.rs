//! User record model for PostgreSQL database operations.
//!
//! ## Models
//!
//! - [`User`] - Stored user record as returned by queries
//! - [`NewUser`] - Data structure for inserting new user records

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::users;

/// A user record as stored in the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique record identifier, assigned by the database on insert.
    pub id: Uuid,
    /// Human-readable name of the record holder.
    pub display_name: String,
    /// Email address, unique across all records.
    pub email_address: String,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
    /// Timestamp when the record was last updated.
    pub updated_at: Timestamp,
}

/// Data for inserting a new user record.
///
/// The identifier and timestamps are assigned by the database.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    /// Human-readable name of the record holder.
    pub display_name: String,
    /// Email address, unique across all records.
    pub email_address: String,
}
