//! Settings structures for Research Radar configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "EXA_API_KEY";

/// Provider request timeout in seconds when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: f64 = 60.0;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub provider: ProviderSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that cannot be used to build the server or client
    pub fn validate(&self) -> Result<()> {
        if self.outgoing.timeout().is_none() {
            bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                self.outgoing.request_timeout
            );
        }
        Ok(())
    }

    /// Merge with environment variables (RADAR_* prefix plus the provider key)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var(API_KEY_ENV) {
            self.provider.api_key = Some(val);
        }
        if let Some(val) = var("RADAR_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("RADAR_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("RADAR_PROVIDER_URL") {
            self.provider.base_url = val;
        }
    }

    /// The provider API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.provider
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Instance name reported in logs
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            instance_name: "Research Radar".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            // deep search can take tens of seconds on the provider side
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

impl OutgoingSettings {
    /// Request timeout, or `None` if it is not a positive finite duration
    pub fn timeout(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.request_timeout)
            .ok()
            .filter(|d| !d.is_zero())
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider API root, without a trailing slash
    pub base_url: String,
    /// API key; normally supplied through `EXA_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.exa.ai".to_string(),
            api_key: None,
        }
    }
}
