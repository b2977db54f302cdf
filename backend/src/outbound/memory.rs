//! In-process user directory.
//!
//! Used when no database is configured and by HTTP tests. Ids are issued
//! sequentially from 1 and restart at 1 after a reset, mirroring a freshly
//! created `SERIAL` column. Duplicate usernames are permitted; lookups return
//! the lowest id.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{SeedOutcome, UserDirectory, UserDirectoryError};
use crate::domain::{User, UserId, Username};

#[derive(Debug)]
struct DirectoryState {
    users: Vec<User>,
    next_id: i32,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl DirectoryState {
    fn insert(&mut self, username: &Username) -> Result<User, UserDirectoryError> {
        let id = UserId::new(self.next_id)
            .map_err(|err| UserDirectoryError::query(format!("id issuance failed: {err}")))?;
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserDirectoryError::query("user id sequence exhausted"))?;
        let user = User::new(id, username.clone());
        self.users.push(user.clone());
        Ok(user)
    }

    fn insert_all(&mut self, usernames: &[Username]) -> Result<Vec<User>, UserDirectoryError> {
        usernames.iter().map(|name| self.insert(name)).collect()
    }
}

/// Mutex-guarded, process-local [`UserDirectory`].
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    state: Mutex<DirectoryState>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding `usernames`, issued ids from 1.
    pub fn with_usernames(usernames: &[Username]) -> Result<Self, UserDirectoryError> {
        let mut state = DirectoryState::default();
        state.insert_all(usernames)?;
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, DirectoryState>, UserDirectoryError> {
        self.state
            .lock()
            .map_err(|_| UserDirectoryError::query("in-memory directory lock poisoned"))
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserDirectoryError> {
        let state = self.lock()?;
        Ok(state
            .users
            .iter()
            .filter(|user| user.username() == username)
            .min_by_key(|user| user.id())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserDirectoryError> {
        let state = self.lock()?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn reset_and_seed(&self, usernames: &[Username]) -> Result<Vec<User>, UserDirectoryError> {
        let mut state = self.lock()?;
        let mut fresh = DirectoryState::default();
        let users = fresh.insert_all(usernames)?;
        *state = fresh;
        Ok(users)
    }

    async fn seed_if_empty(&self, usernames: &[Username]) -> Result<SeedOutcome, UserDirectoryError> {
        let mut state = self.lock()?;
        if !state.users.is_empty() {
            return Ok(SeedOutcome::AlreadyPopulated);
        }
        let users = state.insert_all(usernames)?;
        Ok(SeedOutcome::Seeded(users))
    }
}
