//! PostgreSQL-backed `UserDirectory` adapter.
//!
//! Reset and startup seeding each run inside a single transaction; PostgreSQL
//! DDL is transactional, so a failed reset leaves the previous table intact.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{SeedOutcome, UserDirectory, UserDirectoryError};
use crate::domain::{User, UserId, Username};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Creates the directory table. Must match [`super::schema::users`].
pub(crate) const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
     id SERIAL PRIMARY KEY, \
     username VARCHAR NOT NULL UNIQUE\
     )";

/// Drops the directory table together with its id sequence.
pub(crate) const DROP_USERS_TABLE: &str = "DROP TABLE IF EXISTS users";

/// Diesel-backed implementation of the user directory.
#[derive(Clone)]
pub struct DieselUserDirectory {
    pool: DbPool,
}

impl DieselUserDirectory {
    /// Create a directory over the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use session_auth::outbound::persistence::{DbPool, DieselUserDirectory, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/auth")).await?;
    /// let directory = DieselUserDirectory::new(pool);
    /// # let _ = directory;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserDirectoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserDirectoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserDirectoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserDirectoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserDirectoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => UserDirectoryError::query(info.message().to_owned()),
        _ => UserDirectoryError::query(error_message),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserDirectoryError> {
    User::try_from(row).map_err(|err| UserDirectoryError::query(format!("invalid user row: {err}")))
}

fn rows_to_users(mut rows: Vec<UserRow>) -> Result<Vec<User>, UserDirectoryError> {
    rows.sort_by_key(|row| row.id);
    rows.into_iter().map(row_to_user).collect()
}

fn new_rows(usernames: &[Username]) -> Vec<NewUserRow<'_>> {
    usernames
        .iter()
        .map(|username| NewUserRow {
            username: username.as_ref(),
        })
        .collect()
}

async fn insert_rows(
    conn: &mut AsyncPgConnection,
    rows: &[NewUserRow<'_>],
) -> Result<Vec<UserRow>, diesel::result::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    diesel::insert_into(users::table)
        .values(rows)
        .returning(UserRow::as_returning())
        .get_results(conn)
        .await
}

/// Result of the seed transaction, before row conversion.
enum SeedRows {
    Inserted(Vec<UserRow>),
    Skipped,
}

#[async_trait]
impl UserDirectory for DieselUserDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn reset_and_seed(&self, usernames: &[Username]) -> Result<Vec<User>, UserDirectoryError> {
        let rows = new_rows(usernames);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::sql_query(DROP_USERS_TABLE).execute(conn).await?;
                    diesel::sql_query(CREATE_USERS_TABLE).execute(conn).await?;
                    insert_rows(conn, &rows).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        rows_to_users(inserted)
    }

    async fn seed_if_empty(&self, usernames: &[Username]) -> Result<SeedOutcome, UserDirectoryError> {
        let rows = new_rows(usernames);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let seeded = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::sql_query(CREATE_USERS_TABLE).execute(conn).await?;
                    let existing: i64 = users::table.count().get_result(conn).await?;
                    if existing > 0 {
                        return Ok(SeedRows::Skipped);
                    }
                    insert_rows(conn, &rows).await.map(SeedRows::Inserted)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match seeded {
            SeedRows::Inserted(rows) => rows_to_users(rows).map(SeedOutcome::Seeded),
            SeedRows::Skipped => Ok(SeedOutcome::AlreadyPopulated),
        }
    }
}
