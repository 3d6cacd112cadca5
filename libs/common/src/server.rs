//! Service settings shared by the HTTP services

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the service listens on (e.g., "0.0.0.0:3000")
    pub bind_addr: String,
}

impl ServerConfig {
    /// Load the configuration from defaults and `{PREFIX}_*` environment
    /// variables
    ///
    /// # Environment Variables
    /// - `{PREFIX}_BIND_ADDR`: listen address (default: `default_bind_addr`)
    pub fn load(prefix: &str, default_bind_addr: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", default_bind_addr)?
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_bind_addr() {
        unsafe { std::env::remove_var("SRVTEST_BIND_ADDR") };
        let config = ServerConfig::load("SRVTEST", "0.0.0.0:3000").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_bind_addr_from_env() {
        unsafe { std::env::set_var("SRVTEST_BIND_ADDR", "127.0.0.1:8080") };
        let config = ServerConfig::load("SRVTEST", "0.0.0.0:3000").unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        unsafe { std::env::remove_var("SRVTEST_BIND_ADDR") };
    }
}
