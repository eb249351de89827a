//! Empresa Server - employee directory HTTPS API
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # MySQL pool, models, repository
//! ├── services/      # HTTPS router assembly
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from `LOG_LEVEL` / `LOG_DIR`.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/___ ___  ____  ________  _________ _
  / __/ / __ `__ \/ __ \/ ___/ _ \/ ___/ __ `/
 / /___/ / / / / / /_/ / /  /  __(__  ) /_/ /
/_____/_/ /_/ /_/ .___/_/   \___/____/\__,_/
               /_/
    "#
    );
}
