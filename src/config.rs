//! Runtime configuration.
//!
//! Defaults can be overridden from the environment and then from the command
//! line (see [`crate::cli`]).

use std::path::PathBuf;

use crate::api::DEFAULT_API_ROOT;

pub const ENV_API_ROOT: &str = "CONDUIT_API_ROOT";
pub const ENV_DATA_DIR: &str = "CONDUIT_DATA_DIR";
pub const APP_NAME: &str = "conduit";

/// Configuration for one run of the client.
///
/// # Example
///
/// ```
/// use conduit::config::AppConfig;
///
/// let config = AppConfig::default().with_api_root("http://localhost:3000/api");
/// assert_eq!(config.api_root, "http://localhost:3000/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL every API path is appended to.
    pub api_root: String,
    /// Where the session token and the log file live.
    pub data_dir: PathBuf,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            data_dir: default_data_dir(),
            app_name: APP_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Defaults overridden by `CONDUIT_API_ROOT` and `CONDUIT_DATA_DIR`.
    ///
    /// Empty variables are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(api_root) = non_empty_var(ENV_API_ROOT) {
            config = config.with_api_root(api_root);
        }
        if let Some(data_dir) = non_empty_var(ENV_DATA_DIR) {
            config = config.with_data_dir(data_dir);
        }
        config
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.log", self.app_name))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// `~/.conduit`, or `./.conduit` when there is no home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{}", APP_NAME))
}
