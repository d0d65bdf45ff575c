//! Embedded PostgreSQL bootstrap for repository integration tests.
//!
//! `pg-embed-setup-unpriv` installs into `/var/tmp` unless `PG_RUNTIME_DIR`
//! and `PG_DATA_DIR` are set. When either is missing both are pointed at a
//! temporary directory under the cargo target directory for the duration of
//! the bootstrap, with environment mutation serialised through `env-lock`.
//! The directory is removed once the cluster handle is dropped.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use tempfile::TempDir;

use super::format_postgres_error;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MAX_ATTEMPTS: u32 = 4;
const BASE_BACKOFF: Duration = Duration::from_millis(500);

const TRANSIENT_MARKERS: [&str; 7] = [
    "connection reset",
    "connection refused",
    "timed out",
    "timeout",
    "temporarily unavailable",
    "dns error",
    "error decoding response body",
];

/// Running cluster plus the scratch directory backing it, if one was made.
///
/// Fields drop in order, so the cluster stops before its files are removed.
pub struct EmbeddedCluster {
    pub cluster: TestCluster,
    _scratch: Option<TempDir>,
}

fn scratch_dir() -> std::io::Result<TempDir> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"),
        PathBuf::from,
    );
    let parent = target.join("pg-embed");
    std::fs::create_dir_all(&parent)?;
    let scratch = tempfile::Builder::new()
        .prefix("users-")
        .tempdir_in(parent)?;
    std::fs::create_dir_all(scratch.path().join("install"))?;
    std::fs::create_dir_all(scratch.path().join("data"))?;
    Ok(scratch)
}

fn is_transient(message: &str) -> bool {
    let lower = message.to_lowercase();
    TRANSIENT_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Start an embedded cluster, retrying transient download failures with
/// exponential backoff.
pub fn test_cluster() -> Result<EmbeddedCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let scratch = if std::env::var_os("PG_RUNTIME_DIR").is_none()
        || std::env::var_os("PG_DATA_DIR").is_none()
    {
        Some(scratch_dir().map_err(|err| err.to_string())?)
    } else {
        None
    };
    let _env = scratch.as_ref().map(|dir| {
        env_lock::lock_env([
            (
                "PG_RUNTIME_DIR",
                Some(dir.path().join("install").to_string_lossy().into_owned()),
            ),
            (
                "PG_DATA_DIR",
                Some(dir.path().join("data").to_string_lossy().into_owned()),
            ),
        ])
    });

    let mut attempt = 1;
    loop {
        match TestCluster::new() {
            Ok(cluster) => {
                return Ok(EmbeddedCluster {
                    cluster,
                    _scratch: scratch,
                });
            }
            Err(err) => {
                let message = format!("{err:?}");
                if attempt >= MAX_ATTEMPTS || !is_transient(&message) {
                    return Err(message);
                }
                let backoff = BASE_BACKOFF * 2_u32.pow(attempt - 1);
                eprintln!("pg-embed: attempt {attempt} failed, retrying in {backoff:?}: {message}");
                std::thread::sleep(backoff);
                attempt += 1;
            }
        }
    }
}

/// Drop and recreate `name`, returning its connection URL.
pub fn fresh_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let connection = cluster.connection();
    let mut admin = Client::connect(&connection.database_url("postgres"), NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\"; CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(connection.database_url(name))
}
