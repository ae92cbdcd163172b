//! User repository for managing user records.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::Pagination;
use crate::model::{NewUser, User};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for user database operations.
///
/// Mediates all reads and writes against the `users` table: paginated
/// listing, existence checks by email, and inserts.
pub trait UserRepository {
    /// Inserts a new user record.
    ///
    /// The row is stored exactly as provided; the database assigns the
    /// identifier and timestamps. A violation of the unique email index
    /// surfaces as a [`PgError`] carrying the constraint name.
    fn create_user(&mut self, new_user: NewUser) -> impl Future<Output = PgResult<User>> + Send;

    /// Checks whether a user with the given email address exists.
    ///
    /// Email comparison is an exact, case-sensitive string match. Used as a
    /// fast-path duplicate check before inserting; the unique index remains
    /// the authoritative guard.
    fn email_exists(&mut self, email: &str) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists users with pagination support.
    ///
    /// Records are returned in insertion order (oldest first).
    fn list_users(
        &mut self,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<User>>> + Send;

    /// Returns the exact number of stored users.
    fn count_users(&mut self) -> impl Future<Output = PgResult<i64>> + Send;
}

impl UserRepository for PgConnection {
    async fn create_user(&mut self, new_user: NewUser) -> PgResult<User> {
        use schema::users;

        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn email_exists(&mut self, email: &str) -> PgResult<bool> {
        use schema::users::{self, dsl};

        let count: i64 = users::table
            .filter(dsl::email_address.eq(email))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count > 0)
    }

    async fn list_users(&mut self, pagination: Pagination) -> PgResult<Vec<User>> {
        use schema::users::{self, dsl};

        users::table
            .order(dsl::created_at.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(User::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_users(&mut self) -> PgResult<i64> {
        use schema::users;

        users::table
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
