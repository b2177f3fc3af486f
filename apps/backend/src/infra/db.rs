use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Connect to the database for the given backend kind.
///
/// `sqlite::memory:` gets a single-connection pool so every handle sees the
/// same database; Postgres gets a small fixed pool.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));

    match kind {
        DbKind::Postgres => {
            opts.max_connections(10).min_connections(1);
        }
        DbKind::SqliteMemory => {
            opts.max_connections(1);
        }
    }

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect: {e}")))?;

    info!(backend = ?kind, "database connected");
    Ok(conn)
}
