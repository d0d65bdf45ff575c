//! Builds the HTTP state from settings, choosing the user store.

use std::sync::Arc;

use tracing::{info, warn};

use users_backend::domain::UserService;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::memory::InMemoryUserRepository;
use users_backend::outbound::persistence::{
    DbPool, DieselUserRepository, PoolError, SchemaError, ensure_schema,
};

use super::ServerSettings;

/// Failures while preparing the user store at startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Build handler state backed by PostgreSQL when a database URL is set,
/// otherwise by the in-memory store.
///
/// # Errors
/// Returns [`StartupError`] when the pool cannot be built or the `users`
/// table cannot be created.
pub async fn build_http_state(settings: &ServerSettings) -> Result<HttpState, StartupError> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; users are kept in memory and lost on restart");
        return Ok(memory_state());
    };

    let pool = DbPool::new(settings.pool_config(database_url)).await?;
    ensure_schema(&pool).await?;
    info!("using PostgreSQL user repository");
    let repository = Arc::new(DieselUserRepository::new(pool));
    Ok(HttpState::from_service(UserService::new(repository)))
}

/// Handler state over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::from_service(UserService::new(Arc::new(InMemoryUserRepository::new())))
}
