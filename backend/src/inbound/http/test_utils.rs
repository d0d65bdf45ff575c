//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserId, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserRepository;

/// State backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::from_service(UserService::new(Arc::new(InMemoryUserRepository::new())))
}

/// Port implementation whose every call fails with the wrapped error.
#[derive(Clone)]
pub struct FailingUsers(pub Error);

#[async_trait]
impl UsersQuery for FailingUsers {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Err(self.0.clone())
    }

    async fn get_user(&self, _id: UserId) -> Result<Option<User>, Error> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl UsersCommand for FailingUsers {
    async fn create_user(&self, _name: &str) -> Result<User, Error> {
        Err(self.0.clone())
    }

    async fn update_user(&self, _id: UserId, _name: &str) -> Result<Option<User>, Error> {
        Err(self.0.clone())
    }

    async fn delete_user(&self, _id: UserId) -> Result<bool, Error> {
        Err(self.0.clone())
    }
}

/// State whose ports fail with `error`.
pub fn failing_state(error: Error) -> HttpState {
    HttpState::from_service(FailingUsers(error))
}
