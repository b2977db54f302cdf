//! Session authenticator: the login, check-session and reset use-cases.
//!
//! Implements the driving ports on top of a [`UserDirectory`]. Session storage
//! itself stays in the inbound adapter; this service only resolves identities.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    DirectoryReset, LoginService, SeedOutcome, SessionUserQuery, UserDirectory,
    UserDirectoryError,
};
use crate::domain::{Error, User, UserId, Username};

/// Usernames written by reset-and-seed and by the startup seed, in id order.
pub const SEED_USERNAMES: [&str; 3] = ["alice", "bob", "charlie"];

/// Map directory failures to transport-safe domain errors.
pub(crate) fn map_user_directory_error(error: UserDirectoryError) -> Error {
    match error {
        UserDirectoryError::Connection { message } => Error::service_unavailable(message),
        UserDirectoryError::Query { message } => Error::internal(message),
    }
}

fn seed_usernames() -> Result<Vec<Username>, Error> {
    SEED_USERNAMES
        .iter()
        .map(|name| {
            Username::new(*name)
                .map_err(|err| Error::internal(format!("invalid seed username: {err}")))
        })
        .collect()
}

/// Domain service backing all session-authentication endpoints.
#[derive(Clone)]
pub struct SessionAuthenticator {
    directory: Arc<dyn UserDirectory>,
}

impl SessionAuthenticator {
    /// Create a service over the given directory.
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Create the schema if needed and insert the seed users into an empty
    /// directory. Used at startup.
    pub async fn ensure_seeded(&self) -> Result<SeedOutcome, Error> {
        let usernames = seed_usernames()?;
        let outcome = self
            .directory
            .seed_if_empty(&usernames)
            .await
            .map_err(map_user_directory_error)?;
        match &outcome {
            SeedOutcome::Seeded(users) => info!(count = users.len(), "seeded empty user directory"),
            SeedOutcome::AlreadyPopulated => debug!("user directory already populated"),
        }
        Ok(outcome)
    }
}

#[async_trait]
impl LoginService for SessionAuthenticator {
    async fn login(&self, username: &Username) -> Result<User, Error> {
        let user = self
            .directory
            .find_by_username(username)
            .await
            .map_err(map_user_directory_error)?;
        user.ok_or_else(|| {
            debug!(username = %username, "login for unknown username");
            Error::not_found("user not found")
        })
    }
}

#[async_trait]
impl SessionUserQuery for SessionAuthenticator {
    async fn session_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        let user = self
            .directory
            .find_by_id(user_id)
            .await
            .map_err(map_user_directory_error)?;
        if user.is_none() {
            debug!(user_id = %user_id, "session references a missing user");
        }
        Ok(user)
    }
}

#[async_trait]
impl DirectoryReset for SessionAuthenticator {
    async fn reset_and_seed(&self) -> Result<Vec<User>, Error> {
        let usernames = seed_usernames()?;
        let users = self
            .directory
            .reset_and_seed(&usernames)
            .await
            .map_err(map_user_directory_error)?;
        info!(count = users.len(), "user directory reset and seeded");
        Ok(users)
    }
}
