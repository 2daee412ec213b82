//! Store bootstrap performed once before the server binds.

use std::sync::Arc;
use std::time::Duration;

use yapp_db::store::{ItemStore, MemoryItemStore, PgItemStore, StoreError};

use crate::config::{ServerConfig, StoreBackend};

/// The store could not be brought up. The binary exits on any of these.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database health check failed: {0}")]
    HealthCheck(#[source] StoreError),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the configured store backend, verify it, and apply migrations.
///
/// Connection establishment is bounded by `db_connect_timeout_secs`; there
/// is no retry loop.
pub async fn connect_store(config: &ServerConfig) -> Result<Arc<dyn ItemStore>, StartupError> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store; data is lost on restart");
            Ok(Arc::new(MemoryItemStore::new()))
        }
        StoreBackend::Postgres => {
            let timeout = Duration::from_secs(config.db_connect_timeout_secs);
            let pool = yapp_db::create_pool(&config.database_url, timeout)
                .await
                .map_err(StartupError::Connect)?;
            tracing::info!("Database connection pool created");

            let store = PgItemStore::new(pool);
            store.ping().await.map_err(StartupError::HealthCheck)?;
            tracing::info!("Database health check passed");

            yapp_db::run_migrations(store.pool()).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(store))
        }
    }
}
