//! Console configuration: a RON file with environment overrides.
//!
//! Reads `./.node_console.ron`; a missing file yields defaults, a broken one
//! logs a warning and yields defaults. `NODES_API_URL` overrides the file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use console_logging::{console_info, console_warn};
use nodes_engine::ApiSettings;
use serde::Deserialize;

const CONFIG_FILENAME: &str = ".node_console.ron";
const API_URL_ENV: &str = "NODES_API_URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let defaults = ApiSettings::default();
        Self {
            api_url: defaults.base_url.to_string(),
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
        }
    }
}

impl ConsoleConfig {
    /// Converts into engine settings. An api_url that does not parse logs a
    /// warning and falls back to the default endpoint.
    pub fn api_settings(&self) -> ApiSettings {
        let defaults = ApiSettings::default();
        let base_url = match self.api_url.parse() {
            Ok(url) => url,
            Err(err) => {
                console_warn!(
                    "Invalid api_url {:?} ({}); using {}",
                    self.api_url,
                    err,
                    defaults.base_url
                );
                defaults.base_url
            }
        };

        ApiSettings {
            base_url,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub fn load() -> ConsoleConfig {
    let mut config = load_file(Path::new(CONFIG_FILENAME));

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_url = url;
        }
    }

    config
}

fn load_file(path: &Path) -> ConsoleConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ConsoleConfig::default();
        }
        Err(err) => {
            console_warn!("Failed to read config from {:?}: {}", path, err);
            return ConsoleConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            console_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            console_warn!("Failed to parse config from {:?}: {}", path, err);
            ConsoleConfig::default()
        }
    }
}
