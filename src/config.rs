use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every registry request (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = concat!("latest-version/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Registry endpoints
// =============================================================================

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const DEFAULT_PYPI_URL: &str = "https://pypi.org";

/// Name of the config file looked up in the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub fetch: FetchConfig,
    pub registries: RegistriesConfig,
}

/// HTTP fetch settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Registry-specific configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistriesConfig {
    pub github_releases: RegistryConfig,
    pub npm: RegistryConfig,
    pub pypi: RegistryConfig,
}

impl RegistriesConfig {
    pub fn github_releases_url(&self) -> String {
        self.github_releases.base_url_or(DEFAULT_GITHUB_API_URL)
    }

    pub fn npm_url(&self) -> String {
        self.npm.base_url_or(DEFAULT_NPM_REGISTRY_URL)
    }

    pub fn pypi_url(&self) -> String {
        self.pypi.base_url_or(DEFAULT_PYPI_URL)
    }
}

/// Individual registry configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Overrides the public endpoint (mirrors, GitHub Enterprise)
    pub base_url: Option<String>,
}

impl RegistryConfig {
    fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default config file when
    /// no path is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Returns the path to the config directory for latest-version.
/// Uses $XDG_CONFIG_HOME/latest-version if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/latest-version,
/// or ./latest-version if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("latest-version")
}
