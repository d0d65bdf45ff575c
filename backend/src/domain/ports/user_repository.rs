//! Driven port for user persistence adapters and their errors.
//!
//! Every method is a single statement against the store. Adapters acquire
//! one connection (their unit of work) per call and release it before
//! returning, whether the call succeeds or fails.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserName};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage operations for the users table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in store order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user; the store assigns the identifier.
    async fn insert(&self, name: &UserName) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the name of an existing user.
    ///
    /// Returns `None` without touching the store when no row has `id`.
    async fn update_name(
        &self,
        id: UserId,
        name: &UserName,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user, returning whether a row was deleted.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
