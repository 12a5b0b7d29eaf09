use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub trakt: Option<TraktConfig>,
    #[serde(default)]
    pub requests: RequestConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TraktConfig {
    pub client_id: String,
    pub client_secret: String,
}

/// Request pacing against the Trakt API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RequestConfig {
    /// Pause after every successful request
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// First backoff delay after a 429; doubles on each further attempt
    #[serde(default = "default_backoff_base_secs")]
    pub backoff_base_secs: u64,
    /// Unset means retry rate-limited requests forever
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub max_backoff_secs: Option<u64>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_delay_secs() -> u64 {
    2
}

fn default_page_size() -> u32 {
    100
}

fn default_backoff_base_secs() -> u64 {
    8 // 1, 2 and 4 seconds are too short to clear Trakt's rate window
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
            page_size: default_page_size(),
            backoff_base_secs: default_backoff_base_secs(),
            max_attempts: None,
            max_backoff_secs: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RequestConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_secs(self.backoff_base_secs)
    }

    pub fn max_backoff(&self) -> Option<Duration> {
        self.max_backoff_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Missing file means defaults, a broken file is still an error
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.requests.page_size == 0 {
            return Err(anyhow::anyhow!("requests.page_size must be greater than zero"));
        }
        if self.requests.max_attempts == Some(0) {
            return Err(anyhow::anyhow!("requests.max_attempts must be at least 1 when set"));
        }

        let trakt = self
            .trakt
            .as_ref()
            .ok_or_else(|| {
                anyhow::anyhow!("Trakt is not configured, run `traktexport auth` first")
            })?;
        if trakt.client_id.is_empty() || trakt.client_id == "YOUR_CLIENT_ID" {
            return Err(anyhow::anyhow!("Trakt client_id is not configured"));
        }
        if trakt.client_secret.is_empty() || trakt.client_secret == "YOUR_CLIENT_SECRET" {
            return Err(anyhow::anyhow!("Trakt client_secret is not configured"));
        }

        Ok(())
    }

    pub fn is_trakt_configured(&self) -> bool {
        if let Some(ref trakt) = self.trakt {
            !trakt.client_id.is_empty()
                && trakt.client_id != "YOUR_CLIENT_ID"
                && !trakt.client_secret.is_empty()
                && trakt.client_secret != "YOUR_CLIENT_SECRET"
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn trakt_config(id: &str, secret: &str) -> Option<TraktConfig> {
        Some(TraktConfig {
            client_id: id.to_string(),
            client_secret: secret.to_string(),
        })
    }

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            trakt: trakt_config("test_id", "test_secret"),
            requests: RequestConfig {
                max_attempts: Some(5),
                ..RequestConfig::default()
            },
        };

        config.save_to_file(file.path()).unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.trakt.as_ref().unwrap().client_id, "test_id");
        assert_eq!(loaded.trakt.as_ref().unwrap().client_secret, "test_secret");
        assert_eq!(loaded.requests.max_attempts, Some(5));
        assert_eq!(loaded.requests.page_size, 100);
    }

    #[test]
    fn test_request_defaults_from_partial_toml() {
        let config: Config = toml::from_str("[requests]\ndelay_secs = 5\n").unwrap();
        assert_eq!(config.requests.delay(), Duration::from_secs(5));
        assert_eq!(config.requests.page_size, 100);
        assert_eq!(config.requests.backoff_base(), Duration::from_secs(8));
        assert_eq!(config.requests.max_attempts, None);
        assert_eq!(config.requests.max_backoff(), None);
        assert!(config.trakt.is_none());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.requests.delay_secs, 2);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config {
            trakt: trakt_config("YOUR_CLIENT_ID", "YOUR_CLIENT_SECRET"),
            requests: RequestConfig::default(),
        };
        assert!(config.validate().is_err());
        assert!(!config.is_trakt_configured());

        config.trakt = trakt_config("real_id", "real_secret");
        assert!(config.validate().is_ok());
        assert!(config.is_trakt_configured());

        config.requests.page_size = 0;
        assert!(config.validate().is_err());
    }
}
