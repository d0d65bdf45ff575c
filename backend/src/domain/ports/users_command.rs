//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Write-side user operations.
///
/// Names arrive unvalidated; implementations reject blank names with an
/// [`crate::domain::ErrorCode::InvalidRequest`] error before touching the
/// store.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it with its assigned identifier.
    async fn create_user(&self, name: &str) -> Result<User, Error>;

    /// Rename an existing user. `None` means no record has `id`.
    async fn update_user(&self, id: UserId, name: &str) -> Result<Option<User>, Error>;

    /// Delete a user. `false` means no record has `id`.
    async fn delete_user(&self, id: UserId) -> Result<bool, Error>;
}
