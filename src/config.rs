//! Configuration module
//!
//! Typed configuration with defaults matching the historical serving
//! script: localhost:8080, files served from the project root. An
//! optional `config.toml` and `SERVER_*` environment variables override
//! the defaults.

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub banner: BannerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served to clients, read-only
    pub root_dir: String,
    /// Files tried, in order, when a request resolves to a directory
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

/// Banner configuration
///
/// The program identifier and network name carry no behavior; they are
/// printed at startup and echoed by the info endpoint so the test page
/// operator can cross-check what is deployed.
#[derive(Debug, Deserialize, Clone)]
pub struct BannerConfig {
    pub program_id: String,
    pub network: String,
    /// Path of the page opened in the browser at startup
    pub test_page: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; defaults apply for anything it omits.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.root_dir", ".")?
            .set_default(
                "banner.program_id",
                "4bdQ9U3yXD9EY2SxxMVasPmp5gw7RLtnc8yTkFZovmRR",
            )?
            .set_default("banner.network", "Solana Devnet")?
            .set_default("banner.test_page", "/test-interface.html")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// URL the browser is pointed at once the server is up
    pub fn test_page_url(&self) -> String {
        format!(
            "http://localhost:{}{}",
            self.server.port, self.banner.test_page
        )
    }
}
