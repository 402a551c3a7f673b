use crate::error::{CrumbError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";

/// Configuration for crumb, stored in the user config directory as
/// config.json. Only display preferences live here; inventory state is
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrumbConfig {
    /// Currency symbol used when printing prices (e.g., "$", "€")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for CrumbConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CrumbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CrumbError::Io)?;
        let config: CrumbConfig =
            serde_json::from_str(&content).map_err(CrumbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CrumbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CrumbError::Serialization)?;
        fs::write(config_path, content).map_err(CrumbError::Io)?;
        Ok(())
    }
}

/// The directory the config file lives in.
///
/// `CRUMB_CONFIG_DIR` overrides the platform default so tests (and scripted
/// runs) can isolate themselves from a real user config.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CRUMB_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "crumb").map(|dirs| dirs.config_dir().to_path_buf())
}
