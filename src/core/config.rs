/// Server configuration
///
/// # Environment variables
///
/// Every knob can be overridden through an environment variable.
/// Unset variables fall back to the values below:
///
/// | Env var | Default | Description |
/// |---------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTPS listen port |
/// | LAN_IP | 192.168.20.24 | LAN address, startup log only |
/// | DB_HOST | localhost | MySQL host |
/// | DB_PORT | 3306 | MySQL port |
/// | DB_USER | root | MySQL user |
/// | DB_PASSWORD | 123 | MySQL password |
/// | DB_NAME | empresa | MySQL schema |
/// | DB_MAX_CONNECTIONS | 5 | connection pool cap |
/// | TLS_CERT_PATH | certs/cert.pem | server certificate (PEM) |
/// | TLS_KEY_PATH | certs/key.pem | server private key (PEM) |
/// | STATIC_DIR | static | static asset directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8443 DB_HOST=10.0.0.5 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTPS listen port (bound on all interfaces)
    pub http_port: u16,
    /// LAN address printed in the startup log so devices on the
    /// local network know where to point
    pub lan_ip: String,
    /// MySQL host
    pub db_host: String,
    /// MySQL port
    pub db_port: u16,
    /// MySQL user
    pub db_user: String,
    /// MySQL password
    pub db_password: String,
    /// MySQL schema holding the `empleados` table
    pub db_name: String,
    /// Connection pool cap
    pub db_max_connections: u32,
    /// Path to the TLS server certificate (PEM)
    pub tls_cert_path: String,
    /// Path to the TLS private key (PEM)
    pub tls_key_path: String,
    /// Directory of static assets served at the root path
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            lan_ip: std::env::var("LAN_IP").unwrap_or_else(|_| "192.168.20.24".into()),
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            db_port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3306),
            db_user: std::env::var("DB_USER").unwrap_or_else(|_| "root".into()),
            db_password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "123".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "empresa".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            tls_cert_path: std::env::var("TLS_CERT_PATH")
                .unwrap_or_else(|_| "certs/cert.pem".into()),
            tls_key_path: std::env::var("TLS_KEY_PATH").unwrap_or_else(|_| "certs/key.pem".into()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
        }
    }

    /// Override the static directory and port on top of the env config
    ///
    /// Used in tests
    pub fn with_overrides(static_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.static_dir = static_dir.into();
        config.http_port = http_port;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
