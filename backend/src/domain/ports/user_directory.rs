//! Driven port for the persistent user directory.
//!
//! Outbound adapters (PostgreSQL, in-memory) implement this trait; the domain
//! service never sees rows, pools or locks.

use async_trait::async_trait;

use crate::domain::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user directory adapters.
    pub enum UserDirectoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "user directory connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "user directory query failed: {message}",
    }
}

/// Outcome of seeding the directory at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The directory was empty and the seed users were inserted.
    Seeded(Vec<User>),
    /// The directory already held users; nothing was written.
    AlreadyPopulated,
}

/// Persistent store of users, queried by username or id.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return the first user (lowest id) whose username matches exactly.
    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, UserDirectoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserDirectoryError>;

    /// Drop all stored users and schema, recreate it empty, and insert
    /// `usernames` in order with freshly issued ids starting at 1.
    ///
    /// Implementations perform the whole sequence atomically.
    async fn reset_and_seed(&self, usernames: &[Username]) -> Result<Vec<User>, UserDirectoryError>;

    /// Create the schema if absent and insert `usernames` only when the
    /// directory holds no users.
    async fn seed_if_empty(&self, usernames: &[Username]) -> Result<SeedOutcome, UserDirectoryError>;
}
