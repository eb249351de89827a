//! Database Module
//!
//! Owns the MySQL connection pool shared by all repositories.

pub mod models;
pub mod repository;

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

use crate::core::Config;

/// Database service holding the MySQL connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: MySqlPool,
}

impl DbService {
    /// Build a lazily-connecting pool from the configuration
    ///
    /// No connection is opened until the first query runs.
    pub fn connect_lazy(config: &Config) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);

        // acquire_timeout: fail queries after 5s when the database is unreachable
        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Build the pool and ping it once. An unreachable database is
    /// logged rather than fatal; the server keeps serving and each
    /// query fails on its own.
    pub async fn new(config: &Config) -> Self {
        let service = Self::connect_lazy(config);

        match sqlx::query("SELECT 1").execute(&service.pool).await {
            Ok(_) => tracing::info!("Conectado a la base de datos MySQL ({})", config.db_name),
            Err(e) => tracing::error!("Error al conectar a la base de datos: {}", e),
        }

        service
    }
}
