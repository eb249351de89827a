use thiserror::Error;

/// Errors surfaced by the server run path
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("TLS configuration error: {0}")]
    Tls(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server startup and shutdown
pub type Result<T> = std::result::Result<T, ServerError>;
