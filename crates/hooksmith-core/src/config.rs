//! # Hooksmith Configuration
//!
//! Where the hook server listens and where clients send requests.
//! Supports loading from environment variables and programmatic defaults.
//! Provider credentials live in [`crate::ProviderConfig`].

use tracing::warn;

/// Server bind and client target settings.
///
/// # Example
/// ```rust
/// use hooksmith_core::HookConfig;
///
/// let config = HookConfig::default().with_port(8080);
/// assert_eq!(config.bind_addr(), "127.0.0.1:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Address the server binds to.
    /// Default: 127.0.0.1, Env: HOOKSMITH_HOST
    pub host: String,

    /// Port the server binds to.
    /// Default: 3000, Env: HOOKSMITH_PORT
    pub port: u16,

    /// Base URL the form sends requests to.
    /// Default: http://localhost:3000, Env: HOOKSMITH_URL
    pub server_url: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            server_url: "http://localhost:3000".to_string(),
        }
    }
}

impl HookConfig {
    /// Create a new config from environment variables.
    /// Falls back to defaults for missing variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create a config through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = var("HOOKSMITH_HOST") {
            config.host = v;
        }
        if let Some(v) = var("HOOKSMITH_PORT") {
            match v.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid HOOKSMITH_PORT {:?}, using {}", v, config.port),
            }
        }
        if let Some(v) = var("HOOKSMITH_URL") {
            config.server_url = v;
        }

        config
    }

    /// Set the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the server URL used by clients.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// `host:port` for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HookConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.server_url, "http://localhost:3000");
    }

    #[test]
    fn test_from_vars() {
        let config = HookConfig::from_vars(|key| match key {
            "HOOKSMITH_HOST" => Some("0.0.0.0".to_string()),
            "HOOKSMITH_PORT" => Some("8080".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.server_url, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = HookConfig::from_vars(|key| match key {
            "HOOKSMITH_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HookConfig::default()
            .with_host("0.0.0.0")
            .with_port(9000)
            .with_server_url("http://hooks.internal:9000");

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.server_url, "http://hooks.internal:9000");
    }
}
