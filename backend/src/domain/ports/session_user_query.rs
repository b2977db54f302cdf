//! Driving port resolving the user referenced by a session.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for check-session.
#[async_trait]
pub trait SessionUserQuery: Send + Sync {
    /// Return the user the session points at, or `None` when the reference
    /// dangles.
    async fn session_user(&self, user_id: UserId) -> Result<Option<User>, Error>;
}
