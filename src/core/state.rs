use sqlx::MySqlPool;

use crate::core::Config;
use crate::db::DbService;

/// Shared application state
///
/// Holds the configuration and the MySQL connection pool. `Clone` is
/// shallow (the pool is reference-counted), so handlers receive the
/// state by value through axum's `State` extractor.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// MySQL connection pool
    pub pool: MySqlPool,
}

impl ServerState {
    pub fn new(config: Config, pool: MySqlPool) -> Self {
        Self { config, pool }
    }

    /// Initialize the state: build the connection pool and ping it once
    /// so an unreachable database is reported at startup.
    pub async fn initialize(config: &Config) -> Self {
        let db = DbService::new(config).await;
        Self::new(config.clone(), db.pool)
    }
}
