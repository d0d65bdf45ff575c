//! In-process `UserRepository` used when no database is configured.
//!
//! Identifiers start at 1 and increase monotonically; deleted identifiers are
//! never handed out again. Listing returns users in ascending id order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserName};

#[derive(Debug)]
struct State {
    rows: BTreeMap<UserId, UserName>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Volatile user store guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state();
        Ok(state
            .rows
            .iter()
            .map(|(id, name)| User::new(*id, name.clone()))
            .collect())
    }

    async fn insert(&self, name: &UserName) -> Result<User, UserPersistenceError> {
        let mut state = self.state();
        let id = UserId::new(state.next_id);
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        state.rows.insert(id, name.clone());
        Ok(User::new(id, name.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state();
        Ok(state.rows.get(&id).map(|name| User::new(id, name.clone())))
    }

    async fn update_name(
        &self,
        id: UserId,
        name: &UserName,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state();
        Ok(state.rows.get_mut(&id).map(|stored| {
            *stored = name.clone();
            User::new(id, name.clone())
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state();
        Ok(state.rows.remove(&id).is_some())
    }
}
