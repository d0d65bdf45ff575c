//! Idempotent creation of the users table at startup.
//!
//! This is not a migration system: it only guarantees that the single table
//! the service needs exists, leaving existing data untouched.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL matching [`super::schema::users`].
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    name TEXT NOT NULL\
)";

/// Failures raised while ensuring the schema exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be obtained.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The DDL statement failed.
    #[error("failed to create users table: {message}")]
    Statement { message: String },
}

/// Create the users table when it does not exist yet.
///
/// # Errors
///
/// Returns [`SchemaError`] when a connection cannot be checked out or the
/// statement is rejected.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.checkout().await?;
    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .await
        .map_err(|err| SchemaError::Statement {
            message: err.to_string(),
        })?;
    info!("users table ready");
    Ok(())
}
