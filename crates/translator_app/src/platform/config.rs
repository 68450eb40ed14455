use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use translator_engine::ClientSettings;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "translator.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid server url {url:?}: {source}")]
    ServerUrl { url: String, source: url::ParseError },
}

/// Client configuration loaded from `translator.ron`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub upload_path: String,
    pub history_path: String,
    pub clear_history_path: String,
    pub download_path: String,
    pub download_dir: PathBuf,
    /// Overrides the locale read from the environment.
    pub locale: Option<String>,
    pub log_file: PathBuf,
    pub log_level: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_download_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000/".to_string(),
            upload_path: "/upload".to_string(),
            history_path: "/api/history".to_string(),
            clear_history_path: "/clear_history".to_string(),
            download_path: "/download/".to_string(),
            download_dir: PathBuf::from("downloads"),
            locale: None,
            log_file: PathBuf::from("translator.log"),
            log_level: "info".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 600,
            max_download_bytes: 64 * 1024 * 1024,
        }
    }
}

impl ClientConfig {
    pub fn server_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.server_url).map_err(|source| ConfigError::ServerUrl {
            url: self.server_url.clone(),
            source,
        })
    }

    pub fn client_settings(&self, base_url: Url) -> ClientSettings {
        let mut settings = ClientSettings::new(base_url);
        settings.upload_path = self.upload_path.clone();
        settings.history_path = self.history_path.clone();
        settings.clear_history_path = self.clear_history_path.clone();
        settings.download_path = self.download_path.clone();
        settings.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        settings.request_timeout = Duration::from_secs(self.request_timeout_secs);
        settings.max_download_bytes = self.max_download_bytes;
        settings
    }
}

/// Reads the config file; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ClientConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse(content: &str) -> Result<ClientConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}

/// First non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG`.
pub fn environment_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}
