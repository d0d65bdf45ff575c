//! Driving port for read-only user use-cases.
//!
//! Inbound adapters call this port without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side user operations.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users in store order. An empty store yields an empty list.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Fetch one user, or `None` when no record has `id`.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
