//! Configuration management for ipcheckd

use crate::cli::Cli;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use ipcheck_core::errors::CoreError;
use ipcheck_core::DenyList;
use ipcheck_http::HttpServerConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config files picked up from the working directory, first match wins
const DEFAULT_CONFIG_PATHS: &[&str] = &["ipcheckd.yaml", "ipcheckd.yml", ".ipcheckd.yaml"];

/// Configuration for the ipcheckd service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcheckdConfig {
    /// Address to bind to
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Name reported by the health endpoint
    pub service_name: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Deny-list settings
    pub denylist: DenyListConfig,
}

/// Deny-list settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenyListConfig {
    /// Include the built-in illustrative entries
    pub builtin: bool,
    /// Extra IPv4 entries
    pub ipv4: Vec<String>,
    /// Extra IPv6 entries
    pub ipv6: Vec<String>,
}

impl Default for IpcheckdConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            service_name: "ipchecker".to_string(),
            request_timeout: 30,
            denylist: DenyListConfig::default(),
        }
    }
}

impl Default for DenyListConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            ipv4: Vec::new(),
            ipv6: Vec::new(),
        }
    }
}

impl IpcheckdConfig {
    /// Load configuration from defaults, file and environment
    pub fn load(config_path: &Option<PathBuf>) -> Result<Self, CoreError> {
        Self::figment(config_path)?
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Assemble the provider stack without extracting it
    pub fn figment(config_path: &Option<PathBuf>) -> Result<Figment, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(IpcheckdConfig::default()));

        // Load from default config file if it exists
        if let Some(path) = DEFAULT_CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
            figment = figment.merge(Yaml::file(path));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        // Environment: IPCHECK_* for any key, then the conventional PORT
        Ok(figment
            .merge(Env::prefixed("IPCHECK_").split("__"))
            .merge(Env::raw().only(&["PORT"])))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(ref host) = args.host {
            self.host = host.clone();
        }

        if let Some(port) = args.port {
            self.port = port;
        }

        self
    }

    /// Socket address the HTTP server binds to
    pub fn bind_address(&self) -> Result<SocketAddr, CoreError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| CoreError::Configuration(format!("Invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn http_config(&self) -> Result<HttpServerConfig, CoreError> {
        Ok(HttpServerConfig {
            bind_address: self.bind_address()?,
            request_timeout: Duration::from_secs(self.request_timeout),
        })
    }

    /// Build the deny-list, validating any configured extra entries
    pub fn deny_list(&self) -> Result<DenyList, CoreError> {
        let mut builder = DenyList::builder();
        if self.denylist.builtin {
            builder = builder.with_builtin();
        }
        let list = builder
            .with_ipv4(self.denylist.ipv4.iter().cloned())
            .with_ipv6(self.denylist.ipv6.iter().cloned())
            .build()?;
        Ok(list)
    }
}
