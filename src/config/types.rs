use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote store connection settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Terminal behavior settings.
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

/// Connection settings for the remote ingredient store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the remote JSON store, without a trailing slash.
    ///
    /// Empty by default; must be supplied via the config file, the
    /// `LARDER_STORE_URL` environment variable, or `--store-url`.
    #[serde(default)]
    pub base_url: String,

    /// Overall request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

/// Terminal behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Tick interval in milliseconds. Drives spinner animation and the
    /// search debounce clock.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_connect_timeout_seconds() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}
