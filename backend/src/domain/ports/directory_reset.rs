//! Driving port for the destructive reset-and-seed utility.
//!
//! Only wired into the HTTP surface when explicitly enabled in configuration.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for wiping and reseeding the user directory.
#[async_trait]
pub trait DirectoryReset: Send + Sync {
    /// Wipe the directory and insert the fixed seed users, returning them.
    async fn reset_and_seed(&self) -> Result<Vec<User>, Error>;
}
