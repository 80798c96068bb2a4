//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI arguments over environment variables (`ADBOARD_*`)
//! over configuration files, falling back to the defaults below.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

/// Configuration values controlling the server at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADBOARD")]
pub struct ServerSettings {
    /// Socket address the server binds to, e.g. `127.0.0.1:9000`.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_falls_back_to_the_default() {
        let settings = ServerSettings { bind_addr: None };
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn bind_addr_prefers_the_configured_value() {
        let settings = ServerSettings {
            bind_addr: Some("127.0.0.1:1234".to_owned()),
        };
        assert_eq!(settings.bind_addr(), "127.0.0.1:1234");
    }
}
