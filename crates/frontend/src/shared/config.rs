//! Client configuration
//!
//! Defaults are embedded in the bundle. A TOML document stored in
//! `localStorage["catalogue_config"]` overrides any subset of keys.

use serde::Deserialize;
use std::sync::OnceLock;

use crate::domain::a001_catalogue::ui::list::state::DEFAULT_PAGE_SIZE;

pub const CONFIG_STORAGE_KEY: &str = "catalogue_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every API path. Empty means same origin.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    /// How long a success/error banner stays visible
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[list]
page_size = 8

[messages]
timeout_ms = 4000
"#;

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self { timeout_ms: 4000 }
    }
}

impl ClientConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Load configuration once and cache it for the lifetime of the page
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(load_config)
}

fn load_config() -> ClientConfig {
    if let Some(contents) = read_override() {
        match ClientConfig::from_toml(&contents) {
            Ok(config) => {
                log::info!("Loaded client config from localStorage[{}]", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring invalid client config override: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    ClientConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(CONFIG_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.list.page_size, 8);
        assert_eq!(config.messages.timeout_ms, 4000);
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ClientConfig::from_toml("[list]\npage_size = 20\n").unwrap();
        assert_eq!(config.list.page_size, 20);
        assert_eq!(config.messages.timeout_ms, 4000);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(ClientConfig::from_toml("[list]\npage_size = \"many\"\n").is_err());
    }
}
