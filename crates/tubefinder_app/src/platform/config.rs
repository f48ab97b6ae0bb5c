use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tubefinder_core::DEFAULT_VIDEO_HOST;
use tubefinder_engine::EngineSettings;
use url::Url;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "tubefinder.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("backend_url {url:?} is not a valid URL: {source}")]
    BackendUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("backend_url {0:?} must be an http or https URL")]
    BackendScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the backend serving `/api/search` and `/api/download`.
    pub backend_url: String,
    /// Host that site-relative result URLs are resolved against.
    pub video_host: String,
    pub log_destination: LogDestination,
    /// Overall search request timeout; `None` keeps the transport default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000/".to_string(),
            video_host: DEFAULT_VIDEO_HOST.to_string(),
            log_destination: LogDestination::File,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn engine_settings(&self) -> Result<EngineSettings, ConfigError> {
        let mut raw = self.backend_url.trim().to_string();
        // Endpoints are joined relative to the backend root, so keep any prefix path.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let backend_url = Url::parse(&raw).map_err(|source| ConfigError::BackendUrl {
            url: self.backend_url.clone(),
            source,
        })?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            return Err(ConfigError::BackendScheme(self.backend_url.clone()));
        }

        Ok(EngineSettings {
            backend_url,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..EngineSettings::default()
        })
    }
}

/// Load the config file. `Ok(None)` means there is no file and the defaults
/// apply.
pub(crate) fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::{load_config, AppConfig, ConfigError, CONFIG_FILENAME};
    use crate::platform::logging::LogDestination;

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, None);
    }

    #[test]
    fn partial_file_fills_remaining_fields_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(backend_url: "http://media.local:8080", log_destination: Both)"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap().expect("config present");
        assert_eq!(config.backend_url, "http://media.local:8080");
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.video_host, AppConfig::default().video_host);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(backend_url: 42").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn engine_settings_keep_prefix_and_timeout() {
        let config = AppConfig {
            backend_url: "https://tools.example.com/finder".to_string(),
            request_timeout_secs: Some(15),
            ..AppConfig::default()
        };
        let settings = config.engine_settings().unwrap();
        assert_eq!(
            settings.backend_url.as_str(),
            "https://tools.example.com/finder/"
        );
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn engine_settings_reject_bad_urls() {
        let config = AppConfig {
            backend_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.engine_settings(),
            Err(ConfigError::BackendUrl { .. })
        ));

        let config = AppConfig {
            backend_url: "ftp://files.example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.engine_settings(),
            Err(ConfigError::BackendScheme(_))
        ));
    }
}
