//! Server Implementation
//!
//! HTTPS server startup and graceful shutdown.

use std::net::SocketAddr;

use axum_server::tls_rustls::RustlsConfig;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::https;

/// HTTPS Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        // Load the locally supplied certificate/key pair. No client
        // certificate verification is configured.
        let tls_config = RustlsConfig::from_pem_file(
            &self.config.tls_cert_path,
            &self.config.tls_key_path,
        )
        .await
        .map_err(|e| {
            ServerError::Tls(format!(
                "failed to load {} / {}: {}",
                self.config.tls_cert_path, self.config.tls_key_path, e
            ))
        })?;

        let app = https::build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));

        tracing::info!("Servidor HTTPS accesible en:");
        tracing::info!("  https://localhost:{}", self.config.http_port);
        tracing::info!("  https://{}:{}", self.config.lan_ip, self.config.http_port);
        tracing::info!("Los dispositivos en la red deben aceptar el certificado");

        let handle = axum_server::Handle::new();

        // Handle shutdown signal
        let handle_clone = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            handle_clone.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        axum_server::bind_rustls(addr, tls_config)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        Ok(())
    }
}
