//! Backend entry-point: loads settings, prepares the user store and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, build_http_state, create_server};
use users_backend::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let http_state = build_http_state(&settings)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to prepare user store: {e}")))?;

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, bind_addr.clone())?;
    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    server.await
}
