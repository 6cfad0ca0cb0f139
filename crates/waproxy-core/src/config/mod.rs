mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WaProxyError;
use defaults::*;

/// Top-level waproxy configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Green API host, e.g. `https://7103.api.greenapi.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Serialize back to TOML (used by `waproxy config`).
    pub fn to_toml(&self) -> Result<String, WaProxyError> {
        toml::to_string_pretty(self)
            .map_err(|e| WaProxyError::Config(format!("failed to serialize config: {e}")))
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, WaProxyError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| WaProxyError::Config(format!("failed to parse config: {e}")))?;

    if config.gateway.base_url.trim().is_empty() {
        return Err(WaProxyError::Config(
            "gateway.base_url must not be empty".to_string(),
        ));
    }

    Ok(config)
}
