//! Diesel row types. Internal to the persistence adapter.

use diesel::prelude::*;

use crate::domain::{User, UserValidationError};

use super::schema::users;

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    /// Sequence-issued identifier.
    pub id: i32,
    /// Stored username.
    pub username: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Self::try_from_parts(row.id, row.username)
    }
}

/// Row inserted into `users`; the id comes from the sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    /// Username to insert.
    pub username: &'a str,
}
