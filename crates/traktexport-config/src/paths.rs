use anyhow::Result;
use std::path::{Path, PathBuf};

/// Overrides the directory holding `config.toml`
pub const DIR_ENV: &str = "TRAKTEXPORT_DIR";
/// Overrides the credentials file path
pub const CREDENTIALS_ENV: &str = "TRAKTEXPORT_CFG";

pub struct PathManager {
    config_dir: PathBuf,
    credentials_file: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = match std::env::var_os(DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .join("traktexport"),
        };
        let credentials_file = std::env::var_os(CREDENTIALS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir.join("credentials.toml"));

        Ok(Self { config_dir, credentials_file })
    }

    /// Everything under one directory, ignoring the environment
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let config_dir = base.into();
        Self {
            credentials_file: config_dir.join("credentials.toml"),
            config_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.credentials_file.clone()
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        if let Some(parent) = self.credentials_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
