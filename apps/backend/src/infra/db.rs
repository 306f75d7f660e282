//! Connection pools and schema bootstrap.
//!
//! Pools are built with SQLx directly so per-connection session settings run
//! in an `after_connect` hook, then handed to SeaORM.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{DbConfig, DbKind, DbTarget};
use crate::error::AppError;
use crate::logging::pii::Redacted;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_CONNECT_INTERVAL_MS: u64 = 500;

/// Ordered per-connection statements for the given engine.
fn session_statements(kind: DbKind, busy_timeout_ms: u64) -> Vec<String> {
    match kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {busy_timeout_ms};"),
        ],
        DbKind::Postgres => vec![
            "SET application_name = 'jokenpo-backend';".to_string(),
            "SET timezone = 'UTC';".to_string(),
        ],
    }
}

/// Retry with a fixed interval; returns the last error once attempts run out.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Build a pool for `cfg`. Does NOT run migrations.
pub async fn connect_db(cfg: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let kind = cfg.kind();
    let pool_size = cfg.pool_size();
    let statements = session_statements(kind, cfg.busy_timeout_ms);

    match &cfg.target {
        DbTarget::SqliteFile { .. } | DbTarget::SqliteMemory => {
            let connect_opts = match &cfg.target {
                DbTarget::SqliteFile { path } => SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal),
                _ => SqliteConnectOptions::from_str("sqlite::memory:")
                    .map_err(|e| AppError::config(format!("invalid SQLite options: {e}")))?,
            };

            let mut pool_opts = SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(pool_size)
                .acquire_timeout(ACQUIRE_TIMEOUT);
            if kind == DbKind::SqliteMemory {
                // The database vanishes with its last connection; never reap it.
                pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
            }

            let pool = pool_opts
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        trace!("db=sqlite hook=after_connect ok");
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect_with(connect_opts)
                .await
                .map_err(|e| AppError::config(format!("failed to create SQLite pool: {e}")))?;

            info!(engine = "sqlite", kind = %kind, max = pool_size, "pool=create");
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }
        DbTarget::Postgres { url } => {
            info!(engine = "postgres", url = %Redacted(url), max = pool_size, "pool=connecting");

            let pool = retry_connection(
                || {
                    let statements = statements.clone();
                    async move {
                        PgPoolOptions::new()
                            .max_connections(pool_size)
                            .acquire_timeout(ACQUIRE_TIMEOUT)
                            .idle_timeout(Duration::from_secs(30))
                            .after_connect(move |conn, _meta| {
                                let statements = statements.clone();
                                Box::pin(async move {
                                    for stmt in &statements {
                                        sqlx::query(stmt).execute(&mut *conn).await?;
                                    }
                                    Ok::<_, sqlx::Error>(())
                                })
                            })
                            .connect(url)
                            .await
                            .map_err(|e| {
                                AppError::config(format!(
                                    "failed to connect to Postgres: {}",
                                    Redacted(&e.to_string())
                                ))
                            })
                    }
                },
                PG_CONNECT_ATTEMPTS,
                PG_CONNECT_INTERVAL_MS,
            )
            .await?;

            info!(engine = "postgres", max = pool_size, "pool=create");
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
    }
}

/// Build the app pool *and* guarantee the schema is current.
///
/// Migrations run on the returned pool itself; for in-memory SQLite that is
/// the only connection that will ever see the schema.
pub async fn bootstrap_db(cfg: &DbConfig) -> Result<DatabaseConnection, AppError> {
    info!(kind = %cfg.kind(), pid = std::process::id(), "bootstrap=start");

    let conn = connect_db(cfg).await?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;

    info!("bootstrap=ready");
    Ok(conn)
}
